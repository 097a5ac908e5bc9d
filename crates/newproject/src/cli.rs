//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use newproject_core::{EditorChoice, ProjectKind};

/// newproject - create a new project from your configuration
#[derive(Parser, Debug)]
#[command(name = "newproject")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the new project
    #[arg(required_unless_present_any = ["check_config", "list_kinds"])]
    pub project_name: Option<String>,

    #[command(flatten)]
    pub kinds: KindFlags,

    #[command(flatten)]
    pub editors: EditorFlags,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to newproject_config.yaml
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Validate the configuration and exit
    #[arg(long, conflicts_with = "list_kinds")]
    pub check_config: bool,

    /// List supported project kinds and exit
    #[arg(long)]
    pub list_kinds: bool,
}

/// One flag per project kind; the first set flag in declaration order wins
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Project kinds")]
pub struct KindFlags {
    /// Create a Python project
    #[arg(long)]
    pub python: bool,

    /// Create a Java project
    #[arg(long)]
    pub java: bool,

    /// Create a Go project
    #[arg(long)]
    pub go: bool,

    /// Create a Bash project
    #[arg(long)]
    pub bash: bool,

    /// Create a C++ project
    #[arg(long)]
    pub cpp: bool,

    /// Create a C project
    #[arg(long)]
    pub clang: bool,

    /// Create a PHP project
    #[arg(long)]
    pub php: bool,

    /// Create a Lua project
    #[arg(long)]
    pub lua: bool,

    /// Create a Rust project (cargo new)
    #[arg(long)]
    pub rust: bool,

    /// Create a Ruby project (bundler gem)
    #[arg(long)]
    pub ruby: bool,

    /// Create an OCaml project (dune init project)
    #[arg(long)]
    pub ocaml: bool,

    /// Create a V project (v new)
    #[arg(long)]
    pub vlang: bool,

    /// Create a basic web project
    #[arg(long)]
    pub web: bool,

    /// Create a non-specific project
    #[arg(long)]
    pub none: bool,
}

impl KindFlags {
    /// The selected kind, by flag precedence
    pub fn selected(&self) -> Option<ProjectKind> {
        let flags = [
            self.python,
            self.java,
            self.go,
            self.bash,
            self.cpp,
            self.clang,
            self.php,
            self.lua,
            self.rust,
            self.ruby,
            self.ocaml,
            self.vlang,
            self.web,
            self.none,
        ];
        flags
            .into_iter()
            .zip(ProjectKind::ALL)
            .find_map(|(set, kind)| set.then_some(kind))
    }

    /// Flag spelling of a kind
    pub fn flag_for(kind: ProjectKind) -> &'static str {
        match kind {
            ProjectKind::CLang => "--clang",
            ProjectKind::NonSpecific => "--none",
            ProjectKind::Python => "--python",
            ProjectKind::Java => "--java",
            ProjectKind::Go => "--go",
            ProjectKind::Bash => "--bash",
            ProjectKind::Cpp => "--cpp",
            ProjectKind::Php => "--php",
            ProjectKind::Lua => "--lua",
            ProjectKind::Rust => "--rust",
            ProjectKind::Ruby => "--ruby",
            ProjectKind::Ocaml => "--ocaml",
            ProjectKind::Vlang => "--vlang",
            ProjectKind::Web => "--web",
        }
    }
}

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Editors")]
pub struct EditorFlags {
    /// Open the project in VS Code
    #[arg(long)]
    pub code: bool,

    /// Open the project in PyCharm
    #[arg(long)]
    pub pycharm: bool,

    /// Open the project in IntelliJ IDEA
    #[arg(long)]
    pub idea: bool,
}

impl EditorFlags {
    pub fn selected(&self) -> Option<EditorChoice> {
        [self.code, self.pycharm, self.idea]
            .into_iter()
            .zip(EditorChoice::ALL)
            .find_map(|(set, editor)| set.then_some(editor))
    }
}
