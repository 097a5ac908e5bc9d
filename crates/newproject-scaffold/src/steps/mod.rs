//! Step primitives
//!
//! Each primitive performs one side effect and reports its own failure.
//! Whether a failure ends the pipeline is decided by the calling strategy.

mod editor;
mod fs;
mod runner;
mod runtime;
mod tool;
mod vcs;

pub use editor::open_editor;
pub use fs::{make_dir, write_file, write_readme};
pub use runner::{SystemToolRunner, ToolOutput, ToolRunner};
pub use runtime::provision_runtime_env;
pub use tool::{resolve_tool, run_tool};
pub use vcs::{init_vcs, VcsOutcome};

#[cfg(test)]
pub(crate) mod testing;
