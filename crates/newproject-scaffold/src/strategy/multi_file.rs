//! Multi-file strategy: several files across subdirectories

use super::{open_editor_step, write_project_metadata, CreationStrategy, StrategyContext};
use crate::error::Result;
use crate::report::{PipelineRun, Step};
use crate::steps::{make_dir, write_file};
use newproject_core::{render_template, FileSpec, KindSettings, NewprojectConfig, ProjectKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiFileStrategy {
    /// Paths are relative to the project directory
    pub files: Vec<FileSpec>,
    pub gitignore_content: String,
}

impl MultiFileStrategy {
    pub(super) fn build(
        kind: ProjectKind,
        settings: &KindSettings,
        config: &NewprojectConfig,
    ) -> Result<CreationStrategy> {
        Ok(CreationStrategy::MultiFile(Self {
            files: settings.files.clone(),
            gitignore_content: config.gitignore_content(kind).to_string(),
        }))
    }

    pub(super) fn execute(&self, ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>) -> Result<()> {
        run.fatal(Step::CreateDir, || make_dir(ctx.project_dir))?;

        for file in &self.files {
            let path = render_template(&file.path, ctx.project_name);
            let content = render_template(&file.content, ctx.project_name);
            run.attempt(Step::WriteFile { path: path.clone() }, || {
                write_file(ctx.project_dir, &path, &content)
            });
        }

        write_project_metadata(ctx, run, &self.gitignore_content);
        open_editor_step(ctx, run);
        Ok(())
    }
}
