//! Creation strategies
//!
//! A [`CreationStrategy`] is built once per request from the kind's
//! configuration and then executed as a fixed, ordered pipeline.

mod delegated;
mod multi_file;
mod templated;

pub use delegated::DelegatedStrategy;
pub use multi_file::MultiFileStrategy;
pub use templated::{StarterFile, TemplatedStrategy};

use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::report::{PipelineRun, Step};
use crate::steps::{init_vcs, open_editor, write_readme, ToolRunner};
use camino::Utf8Path;
use newproject_core::{EditorChoice, KindSettings, NewprojectConfig, ProjectKind, StrategyTag};

/// Everything a strategy needs to create one project
pub struct StrategyContext<'a> {
    pub project_name: &'a str,
    pub project_dir: &'a Utf8Path,
    pub kind_folder: &'a Utf8Path,
    pub editor: Option<EditorChoice>,
    pub runner: &'a dyn ToolRunner,
    pub platform: Platform,
}

/// The creation algorithm selected for a kind, with its settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationStrategy {
    Templated(TemplatedStrategy),
    Delegated(DelegatedStrategy),
    MultiFile(MultiFileStrategy),
}

type Builder = fn(ProjectKind, &KindSettings, &NewprojectConfig) -> Result<CreationStrategy>;

fn builder(tag: StrategyTag) -> Builder {
    match tag {
        StrategyTag::Templated => TemplatedStrategy::build,
        StrategyTag::Delegated => DelegatedStrategy::build,
        StrategyTag::MultiFile => MultiFileStrategy::build,
    }
}

impl CreationStrategy {
    /// Build the strategy for `kind` from its configuration section
    pub fn for_kind(kind: ProjectKind, config: &NewprojectConfig) -> Result<Self> {
        let settings = config
            .settings(kind)
            .ok_or_else(|| Error::kind_not_configured(kind.config_key()))?;
        builder(kind.strategy_tag())(kind, settings, config)
    }

    pub fn tag(&self) -> StrategyTag {
        match self {
            Self::Templated(_) => StrategyTag::Templated,
            Self::Delegated(_) => StrategyTag::Delegated,
            Self::MultiFile(_) => StrategyTag::MultiFile,
        }
    }

    pub(crate) fn execute(&self, ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>) -> Result<()> {
        match self {
            Self::Templated(s) => s.execute(ctx, run),
            Self::Delegated(s) => s.execute(ctx, run),
            Self::MultiFile(s) => s.execute(ctx, run),
        }
    }
}

/// README, repository and ignore file, shared by the strategies that own
/// the project layout
fn write_project_metadata(ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>, ignore_content: &str) {
    run.attempt(Step::Readme, || write_readme(ctx.project_dir, ctx.project_name));

    run.begin(&Step::VcsInit);
    let vcs = init_vcs(ctx.runner, ctx.project_dir, ignore_content);
    run.record(Step::VcsInit, vcs.repository);
    match vcs.ignore_file {
        Some(result) => run.record(Step::IgnoreFile, result),
        None => run.skip(Step::IgnoreFile),
    }
}

fn open_editor_step(ctx: &StrategyContext<'_>, run: &mut PipelineRun<'_>) {
    if ctx.editor.is_none() {
        run.skip(Step::Editor);
        return;
    }
    run.attempt(Step::Editor, || open_editor(ctx.runner, ctx.editor, ctx.project_dir));
}
