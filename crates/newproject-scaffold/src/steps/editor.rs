//! Opening a project in an editor

use super::runner::ToolRunner;
use super::tool::run_tool;
use crate::error::Result;
use camino::Utf8Path;
use newproject_core::EditorChoice;
use tracing::info;

/// Launch the chosen editor on `dir`
///
/// Does nothing when no editor was requested. An editor that is not on the
/// search path is `ToolNotFound`.
pub fn open_editor(runner: &dyn ToolRunner, editor: Option<EditorChoice>, dir: &Utf8Path) -> Result<()> {
    let Some(editor) = editor else {
        return Ok(());
    };

    info!("Opening {} in {}", dir, editor);
    run_tool(runner, editor.command(), &[dir.to_string()], dir)
}
