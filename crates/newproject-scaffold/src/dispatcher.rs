//! Request dispatch
//!
//! The [`Dispatcher`] resolves a request's kind to its strategy and settings,
//! checks every precondition, and runs the pipeline end to end.

use crate::error::{Error, Result};
use crate::guard::PathGuard;
use crate::observer::{NoOpObserver, PipelineObserver};
use crate::platform::Platform;
use crate::report::{CreationReport, PipelineRun, Step};
use crate::steps::ToolRunner;
use crate::strategy::{CreationStrategy, StrategyContext};
use newproject_core::{EditorChoice, NewprojectConfig, ProjectKind};
use tracing::info;

static NO_OP_OBSERVER: NoOpObserver = NoOpObserver;

/// A single project creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub kind: ProjectKind,
    pub project_name: String,
    pub editor: Option<EditorChoice>,
}

impl ProjectRequest {
    pub fn new(kind: ProjectKind, project_name: impl Into<String>) -> Self {
        Self {
            kind,
            project_name: project_name.into(),
            editor: None,
        }
    }

    /// Open the project in `editor` once it is created
    pub fn with_editor(mut self, editor: Option<EditorChoice>) -> Self {
        self.editor = editor;
        self
    }
}

/// Runs creation requests against one immutable configuration
pub struct Dispatcher<'a> {
    config: &'a NewprojectConfig,
    runner: &'a dyn ToolRunner,
    observer: &'a dyn PipelineObserver,
    platform: Platform,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a NewprojectConfig, runner: &'a dyn ToolRunner) -> Self {
        Self {
            config,
            runner,
            observer: &NO_OP_OBSERVER,
            platform: Platform::current(),
        }
    }

    /// Report step events to `observer`
    pub fn with_observer(mut self, observer: &'a dyn PipelineObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Override the detected platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Create the requested project
    ///
    /// Returns `Err` on the first fatal failure. Non-fatal step failures are
    /// listed in the returned report.
    pub fn dispatch(&self, request: &ProjectRequest) -> Result<CreationReport> {
        let kind = request.kind;
        let settings = self
            .config
            .settings(kind)
            .ok_or_else(|| Error::kind_not_configured(kind.config_key()))?;

        let kind_folder = self.config.dev_root().join(&settings.projects_dir_name);
        let project_dir = kind_folder.join(&request.project_name);
        let strategy = CreationStrategy::for_kind(kind, self.config)?;

        info!(
            "Creating {} project '{}' ({} strategy)",
            kind,
            request.project_name,
            strategy.tag()
        );

        let mut run = PipelineRun::new(self.observer);

        let guard = PathGuard {
            dev_root: self.config.dev_root(),
            kind,
            kind_folder: &kind_folder,
            project_dir: &project_dir,
        };
        run.fatal(Step::Preconditions, || guard.check(&request.project_name))?;

        let ctx = StrategyContext {
            project_name: &request.project_name,
            project_dir: &project_dir,
            kind_folder: &kind_folder,
            editor: request.editor,
            runner: self.runner,
            platform: self.platform,
        };
        strategy.execute(&ctx, &mut run)?;

        let report = run.finish(kind, strategy.tag(), &project_dir);
        info!(
            "Created {} with {} non-fatal failure(s)",
            report.project_dir,
            report.failures().count()
        );
        Ok(report)
    }
}
