//! Test double for [`ToolRunner`]

use super::runner::{ToolOutput, ToolRunner};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Mutex;

/// Records invocations; only `installed` programs resolve
#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub installed: Vec<&'static str>,
    pub failing: Vec<&'static str>,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingRunner {
    pub fn with(installed: &[&'static str]) -> Self {
        Self {
            installed: installed.to_vec(),
            ..Default::default()
        }
    }

    /// Make `programs` exit non-zero when run
    pub fn failing(mut self, programs: &[&'static str]) -> Self {
        self.failing = programs.to_vec();
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolRunner for RecordingRunner {
    fn resolve(&self, program: &str) -> Option<Utf8PathBuf> {
        self.installed
            .contains(&program)
            .then(|| Utf8PathBuf::from("/fake/bin").join(program))
    }

    fn run(&self, program: &Utf8Path, args: &[String], _cwd: &Utf8Path) -> std::io::Result<ToolOutput> {
        let name = program.file_name().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push((name.clone(), args.to_vec()));

        if self.failing.contains(&name.as_str()) {
            return Ok(ToolOutput::failed(1, format!("{} exploded", name)));
        }
        Ok(ToolOutput::ok())
    }
}
