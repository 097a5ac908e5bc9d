//! Delegated strategy: an external generator creates the project

use super::{open_editor_step, CreationStrategy, StrategyContext};
use crate::error::{Error, Result};
use crate::report::{PipelineRun, Step};
use crate::steps::run_tool;
use newproject_core::{Error as CoreError, KindSettings, NewprojectConfig, ProjectKind};

/// `<program> <args...> <project_dir>`, run from the kind folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedStrategy {
    pub program: String,
    pub args: Vec<String>,
}

impl DelegatedStrategy {
    pub(super) fn build(
        kind: ProjectKind,
        settings: &KindSettings,
        _config: &NewprojectConfig,
    ) -> Result<CreationStrategy> {
        let (program, args) = match &settings.command {
            Some(command) => (command.program.clone(), command.args.clone()),
            None => {
                let (program, args) = kind.default_command().ok_or_else(|| {
                    CoreError::invalid_config(format!(
                        "{}: no generator command configured",
                        kind.config_key()
                    ))
                })?;
                (program.to_string(), args.iter().map(|a| a.to_string()).collect())
            }
        };

        Ok(CreationStrategy::Delegated(Self { program, args }))
    }

    /// Generator arguments with the project directory appended
    pub fn argv(&self, ctx: &StrategyContext<'_>) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(ctx.project_dir.to_string());
        args
    }

    pub(super) fn execute(&self, ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>) -> Result<()> {
        let step = Step::Generator {
            program: self.program.clone(),
        };
        run.fatal(step, || {
            run_tool(ctx.runner, &self.program, &self.argv(ctx), ctx.kind_folder)
        })?;

        run.fatal(Step::VerifyOutput, || {
            if ctx.project_dir.is_dir() {
                Ok(())
            } else {
                Err(Error::tool_execution_failed(
                    &self.program,
                    format!("exited successfully but {} was not created", ctx.project_dir),
                ))
            }
        })?;

        open_editor_step(ctx, run);
        Ok(())
    }
}
