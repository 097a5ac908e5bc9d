//! Capability boundary for external programs
//!
//! Every external process the pipeline starts goes through a [`ToolRunner`],
//! so strategies can be exercised without git, Python or a language
//! toolchain installed.

use camino::{Utf8Path, Utf8PathBuf};
use std::process::Command;
use tracing::debug;

/// Result of one external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the program exited with status zero
    pub success: bool,
    /// Exit code, if the program exited normally
    pub code: Option<i32>,
    /// Captured standard error
    pub stderr: String,
}

impl ToolOutput {
    /// A successful run with no diagnostics
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and diagnostics
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stderr: stderr.into(),
        }
    }
}

/// Resolves and runs external programs
pub trait ToolRunner: Send + Sync {
    /// Locate a program on the search path
    fn resolve(&self, program: &str) -> Option<Utf8PathBuf>;

    /// Run a resolved program to completion
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, program: &Utf8Path, args: &[String], cwd: &Utf8Path)
        -> std::io::Result<ToolOutput>;
}

/// [`ToolRunner`] backed by the search path and `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn resolve(&self, program: &str) -> Option<Utf8PathBuf> {
        which::which(program)
            .ok()
            .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
    }

    fn run(
        &self,
        program: &Utf8Path,
        args: &[String],
        cwd: &Utf8Path,
    ) -> std::io::Result<ToolOutput> {
        debug!("Running {} {} in {}", program, args.join(" "), cwd);

        let output = Command::new(program.as_std_path())
            .args(args)
            .current_dir(cwd.as_std_path())
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
