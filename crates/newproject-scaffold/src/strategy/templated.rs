//! Templated strategy: the tool writes every file itself

use super::{open_editor_step, write_project_metadata, CreationStrategy, StrategyContext};
use crate::error::Result;
use crate::report::{PipelineRun, Step};
use crate::steps::{make_dir, provision_runtime_env, write_file};
use newproject_core::{
    render_template, Error as CoreError, KindSettings, NewprojectConfig, ProjectKind, RuntimeEnv,
};
use tracing::debug;

/// Starter source file; both fields may contain `{project_name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatedStrategy {
    /// Absent for kinds without a starter file
    pub starter: Option<StarterFile>,
    pub gitignore_content: String,
    pub runtime_env: Option<RuntimeEnv>,
}

impl TemplatedStrategy {
    pub(super) fn build(
        kind: ProjectKind,
        settings: &KindSettings,
        config: &NewprojectConfig,
    ) -> Result<CreationStrategy> {
        let starter = match &settings.file_content {
            Some(content) => {
                let name = settings
                    .file_name
                    .clone()
                    .or_else(|| kind.default_file_name().map(str::to_string))
                    .ok_or_else(|| {
                        CoreError::invalid_config(format!(
                            "{}: file_content is set but no file_name is configured",
                            kind.config_key()
                        ))
                    })?;
                Some(StarterFile {
                    name,
                    content: content.clone(),
                })
            }
            None => None,
        };

        Ok(CreationStrategy::Templated(Self {
            starter,
            gitignore_content: config.gitignore_content(kind).to_string(),
            runtime_env: kind.runtime_env(),
        }))
    }

    pub(super) fn execute(&self, ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>) -> Result<()> {
        run.fatal(Step::CreateDir, || make_dir(ctx.project_dir))?;

        if let Some(env) = self.runtime_env {
            run.attempt(Step::RuntimeEnv, || {
                provision_runtime_env(ctx.runner, ctx.platform, env, ctx.project_dir)
            });
        }

        if let Some(starter) = &self.starter {
            let name = render_template(&starter.name, ctx.project_name);
            let content = render_template(&starter.content, ctx.project_name);
            debug!("Starter file: {}", name);
            run.attempt(Step::WriteFile { path: name.clone() }, || {
                write_file(ctx.project_dir, &name, &content)
            });
        }

        write_project_metadata(ctx, run, &self.gitignore_content);
        open_editor_step(ctx, run);
        Ok(())
    }
}
