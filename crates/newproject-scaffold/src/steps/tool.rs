//! Running external programs as pipeline steps

use super::runner::ToolRunner;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Locate a program, failing with `ToolNotFound` when it is absent
pub fn resolve_tool(runner: &dyn ToolRunner, program: &str) -> Result<Utf8PathBuf> {
    runner
        .resolve(program)
        .ok_or_else(|| Error::tool_not_found(program))
}

/// Run an external program to completion
///
/// The program is resolved first; when it is absent nothing is executed.
/// A spawn failure or a non-zero exit is `ToolExecutionFailed`.
pub fn run_tool(
    runner: &dyn ToolRunner,
    program: &str,
    args: &[String],
    cwd: &Utf8Path,
) -> Result<()> {
    let path = resolve_tool(runner, program)?;
    debug!("Resolved {} to {}", program, path);

    let output = runner
        .run(&path, args, cwd)
        .map_err(|e| Error::tool_execution_failed(program, e.to_string()))?;

    if output.success {
        return Ok(());
    }

    let status = match output.code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    let message = if output.stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, output.stderr)
    };
    Err(Error::tool_execution_failed(program, message))
}
