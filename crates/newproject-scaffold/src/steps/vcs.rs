//! Version control initialization

use super::fs::write_file;
use super::runner::ToolRunner;
use super::tool::{resolve_tool, run_tool};
use crate::error::Result;
use camino::Utf8Path;
use tracing::{debug, info};

/// Outcome of [`init_vcs`]
///
/// Repository creation and the ignore file fail independently, so each
/// carries its own result. `ignore_file` is `None` when git is not installed
/// and nothing was attempted.
#[derive(Debug)]
pub struct VcsOutcome {
    pub repository: Result<()>,
    pub ignore_file: Option<Result<()>>,
}

/// Initialize a git repository in `dir` and write its `.gitignore`
///
/// Without git nothing is written. Once git resolves, the ignore file is
/// written whether or not `git init` succeeded.
pub fn init_vcs(runner: &dyn ToolRunner, dir: &Utf8Path, ignore_content: &str) -> VcsOutcome {
    if let Err(e) = resolve_tool(runner, "git") {
        return VcsOutcome {
            repository: Err(e),
            ignore_file: None,
        };
    }

    info!("Initializing git repository at: {}", dir);
    let repository = run_tool(runner, "git", &["init".to_string(), dir.to_string()], dir);

    let ignore_file = write_file(dir, ".gitignore", ignore_content).map(|path| {
        debug!("Wrote {} ({} bytes)", path, ignore_content.len());
    });

    VcsOutcome {
        repository,
        ignore_file: Some(ignore_file),
    }
}
