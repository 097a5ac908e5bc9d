//! Language runtime environments

use super::runner::ToolRunner;
use super::tool::run_tool;
use crate::error::Result;
use crate::platform::Platform;
use camino::Utf8Path;
use newproject_core::RuntimeEnv;
use tracing::{debug, info};

/// Provision a runtime environment inside the project directory
///
/// Python: `python3 -m venv <dir>/venv` on macOS and Linux. On Windows
/// `virtualenv <dir>/venv` is preferred when it is installed.
pub fn provision_runtime_env(
    runner: &dyn ToolRunner,
    platform: Platform,
    env: RuntimeEnv,
    dir: &Utf8Path,
) -> Result<()> {
    let target = dir.join(env.dir_name());
    info!("Generating {} at {}", env.dir_name(), target);

    match env {
        RuntimeEnv::PythonVenv => {
            let (program, mut args) = python_venv_command(runner, platform);
            args.push(target.to_string());
            debug!("Using {} on {}", program, platform);
            run_tool(runner, program, &args, dir)
        }
    }
}

fn python_venv_command(runner: &dyn ToolRunner, platform: Platform) -> (&'static str, Vec<String>) {
    if platform == Platform::Windows && runner.resolve("virtualenv").is_some() {
        return ("virtualenv", Vec::new());
    }
    ("python3", vec!["-m".to_string(), "venv".to_string()])
}
