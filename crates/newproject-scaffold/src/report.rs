//! Pipeline steps, their outcomes and the creation report

use crate::error::{Error, Result};
use crate::observer::PipelineObserver;
use camino::{Utf8Path, Utf8PathBuf};
use newproject_core::{ProjectKind, StrategyTag};
use tracing::{debug, warn};

/// One step of a creation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Development root, name, kind folder and existence checks
    Preconditions,
    /// Project directory creation
    CreateDir,
    /// Runtime environment such as a Python venv
    RuntimeEnv,
    /// A file written by the tool itself
    WriteFile { path: String },
    /// `README.md`
    Readme,
    /// External generator owning the project layout
    Generator { program: String },
    /// Post-generator check that the project directory exists
    VerifyOutput,
    /// `git init`
    VcsInit,
    /// `.gitignore`
    IgnoreFile,
    /// Editor launch
    Editor,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preconditions => write!(f, "check preconditions"),
            Self::CreateDir => write!(f, "create project directory"),
            Self::RuntimeEnv => write!(f, "generate runtime environment"),
            Self::WriteFile { path } => write!(f, "write {}", path),
            Self::Readme => write!(f, "write README.md"),
            Self::Generator { program } => write!(f, "run {}", program),
            Self::VerifyOutput => write!(f, "verify generated project"),
            Self::VcsInit => write!(f, "initialize git repository"),
            Self::IgnoreFile => write!(f, "write .gitignore"),
            Self::Editor => write!(f, "open editor"),
        }
    }
}

/// How a step ended
#[derive(Debug)]
pub enum StepOutcome {
    Done,
    /// Not applicable to this request (e.g. no editor requested)
    Skipped,
    /// Failed without stopping the pipeline
    Failed(Error),
}

impl StepOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A step together with its outcome
#[derive(Debug)]
pub struct StepRecord {
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Result of a completed creation pipeline
///
/// Only pipelines that passed every fatal step produce a report; fatal
/// failures surface as `Err` from the dispatcher instead.
#[derive(Debug)]
pub struct CreationReport {
    pub kind: ProjectKind,
    pub strategy: StrategyTag,
    pub project_dir: Utf8PathBuf,
    pub steps: Vec<StepRecord>,
}

impl CreationReport {
    /// Steps that failed without stopping the pipeline
    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|r| matches!(r.outcome, StepOutcome::Failed(_)))
    }

    /// Whether every executed step succeeded or was skipped
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Outcome of the first record for `step`, if it ran
    pub fn outcome(&self, step: &Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|r| &r.step == step)
            .map(|r| &r.outcome)
    }
}

/// Drives steps through the observer and collects their outcomes
pub(crate) struct PipelineRun<'a> {
    observer: &'a dyn PipelineObserver,
    steps: Vec<StepRecord>,
}

impl<'a> PipelineRun<'a> {
    pub fn new(observer: &'a dyn PipelineObserver) -> Self {
        Self {
            observer,
            steps: Vec::new(),
        }
    }

    /// Run a step whose failure ends the pipeline
    pub fn fatal<T>(&mut self, step: Step, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.observer.on_step_start(&step);
        match f() {
            Ok(value) => {
                self.observer.on_step_done(&step);
                self.steps.push(StepRecord {
                    step,
                    outcome: StepOutcome::Done,
                });
                Ok(value)
            }
            Err(e) => {
                debug!("Step '{}' failed, stopping: {}", step, e);
                self.observer.on_step_failed(&step, &e, true);
                Err(e)
            }
        }
    }

    /// Run a step whose failure is recorded and logged
    pub fn attempt<T>(&mut self, step: Step, f: impl FnOnce() -> Result<T>) {
        self.observer.on_step_start(&step);
        let result = f().map(|_| ());
        self.record(step, result);
    }

    /// Record the result of a step that was already started
    pub fn record(&mut self, step: Step, result: Result<()>) {
        let outcome = match result {
            Ok(()) => {
                self.observer.on_step_done(&step);
                StepOutcome::Done
            }
            Err(e) => {
                warn!("Step '{}' failed: {}", step, e);
                self.observer.on_step_failed(&step, &e, false);
                StepOutcome::Failed(e)
            }
        };
        self.steps.push(StepRecord { step, outcome });
    }

    /// Announce a step whose result arrives later through [`Self::record`]
    pub fn begin(&self, step: &Step) {
        self.observer.on_step_start(step);
    }

    pub fn skip(&mut self, step: Step) {
        self.observer.on_step_skipped(&step);
        self.steps.push(StepRecord {
            step,
            outcome: StepOutcome::Skipped,
        });
    }

    pub fn finish(self, kind: ProjectKind, strategy: StrategyTag, project_dir: &Utf8Path) -> CreationReport {
        CreationReport {
            kind,
            strategy,
            project_dir: project_dir.to_owned(),
            steps: self.steps,
        }
    }
}
