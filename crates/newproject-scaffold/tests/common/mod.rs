//! Shared fixtures for scaffold integration tests

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use newproject_core::{
    embedded_default_config, ConfigSource, ConfigValidator, NewprojectConfig, ProjectKind,
};
use newproject_scaffold::{ToolOutput, ToolRunner};
use std::collections::HashSet;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stand-in for the external programs the pipeline launches
///
/// Generators (`cargo`, `bundler`, `dune`, `v`, `python3`, `virtualenv`)
/// create the directory named by their last argument; `git` creates
/// `<last arg>/.git`.
pub struct FakeRunner {
    installed: HashSet<String>,
    failing: HashSet<String>,
    silent: HashSet<String>,
    ignore_file_as_dir: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    /// Every program the default configuration can launch is installed
    pub fn all_installed() -> Self {
        Self::with(&[
            "git", "python3", "virtualenv", "cargo", "bundler", "dune", "v", "code", "pycharm",
            "idea",
        ])
    }

    pub fn with(installed: &[&str]) -> Self {
        Self {
            installed: installed.iter().map(|s| s.to_string()).collect(),
            failing: HashSet::new(),
            silent: HashSet::new(),
            ignore_file_as_dir: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without(mut self, program: &str) -> Self {
        self.installed.remove(program);
        self
    }

    /// `program` exits non-zero
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    /// `program` exits zero without creating anything
    pub fn silent(mut self, program: &str) -> Self {
        self.silent.insert(program.to_string());
        self
    }

    /// `git init` leaves a directory where `.gitignore` should go
    pub fn blocking_ignore_file(mut self) -> Self {
        self.ignore_file_as_dir = true;
        self
    }

    /// Every invocation as `[program, args...]`
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ran(&self, program: &str) -> bool {
        self.calls().iter().any(|c| c[0] == program)
    }
}

impl ToolRunner for FakeRunner {
    fn resolve(&self, program: &str) -> Option<Utf8PathBuf> {
        self.installed
            .contains(program)
            .then(|| Utf8PathBuf::from("/fake/bin").join(program))
    }

    fn run(&self, program: &Utf8Path, args: &[String], _cwd: &Utf8Path) -> std::io::Result<ToolOutput> {
        let name = program.file_name().unwrap_or_default().to_string();
        let mut call = vec![name.clone()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call);

        if self.failing.contains(&name) {
            return Ok(ToolOutput::failed(1, format!("{}: simulated failure", name)));
        }
        if self.silent.contains(&name) {
            return Ok(ToolOutput::ok());
        }

        let target = args.last().map(Utf8PathBuf::from);
        match (name.as_str(), target) {
            ("git", Some(dir)) => {
                fs::create_dir_all(dir.join(".git"))?;
                if self.ignore_file_as_dir {
                    fs::create_dir_all(dir.join(".gitignore"))?;
                }
            }
            ("cargo" | "bundler" | "dune" | "v" | "python3" | "virtualenv", Some(dir)) => {
                fs::create_dir_all(dir)?;
            }
            _ => {}
        }
        Ok(ToolOutput::ok())
    }
}

/// A development root in a temporary directory
pub struct Workspace {
    _temp: TempDir,
    pub root: Utf8PathBuf,
    pub config: NewprojectConfig,
}

impl Workspace {
    /// Default configuration rooted in a fresh temporary directory, with
    /// every kind folder created
    pub fn new() -> Self {
        let ws = Self::bare();
        for kind in ProjectKind::ALL {
            fs::create_dir_all(ws.kind_folder(kind)).unwrap();
        }
        ws
    }

    /// Development root exists but no kind folder does
    pub fn bare() -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().join("Development")).unwrap();
        fs::create_dir(&root).unwrap();

        let yaml = embedded_default_config().unwrap();
        let config = NewprojectConfig::from_yaml(
            &yaml,
            ConfigSource::Embedded,
            &ConfigValidator::new().unwrap(),
        )
        .unwrap()
        .with_dev_root(root.clone());

        Self {
            _temp: temp,
            root,
            config,
        }
    }

    pub fn kind_folder(&self, kind: ProjectKind) -> Utf8PathBuf {
        self.config.kind_folder(kind).unwrap()
    }

    pub fn project_dir(&self, kind: ProjectKind, name: &str) -> Utf8PathBuf {
        self.kind_folder(kind).join(name)
    }

    /// Names of every entry below the development root, sorted
    pub fn snapshot(&self) -> Vec<String> {
        fn walk(dir: &Utf8Path, out: &mut Vec<String>) {
            for entry in dir.read_dir_utf8().unwrap() {
                let entry = entry.unwrap();
                out.push(entry.path().to_string());
                if entry.path().is_dir() {
                    walk(entry.path(), out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out.sort();
        out
    }
}
