//! Pipeline observation
//!
//! This module provides the `PipelineObserver` trait for following a creation
//! pipeline step by step, and a `TracingObserver` implementation that logs
//! using the `tracing` crate.

use crate::error::Error;
use crate::report::Step;
use tracing::{debug, info, warn};

/// Observer trait for pipeline step events
///
/// Implement this trait to drive progress output or collect diagnostics
/// while a project is being created.
///
/// # Example
///
/// ```rust
/// use newproject_scaffold::{Error, PipelineObserver, Step};
///
/// struct CountingObserver;
///
/// impl PipelineObserver for CountingObserver {
///     fn on_step_start(&self, step: &Step) {}
///
///     fn on_step_done(&self, step: &Step) {}
///
///     fn on_step_failed(&self, step: &Step, error: &Error, fatal: bool) {}
/// }
/// ```
pub trait PipelineObserver: Send + Sync {
    /// Called before a step runs
    fn on_step_start(&self, step: &Step);

    /// Called when a step succeeds
    fn on_step_done(&self, step: &Step);

    /// Called when a step fails
    ///
    /// # Arguments
    ///
    /// * `step` - The step that failed
    /// * `error` - The error it reported
    /// * `fatal` - Whether the pipeline stops here
    fn on_step_failed(&self, step: &Step, error: &Error, fatal: bool);

    /// Called when a step does not apply to the request
    fn on_step_skipped(&self, step: &Step) {
        // Default implementation does nothing
        let _ = step;
    }
}

/// A no-op observer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl PipelineObserver for NoOpObserver {
    fn on_step_start(&self, _step: &Step) {}

    fn on_step_done(&self, _step: &Step) {}

    fn on_step_failed(&self, _step: &Step, _error: &Error, _fatal: bool) {}
}

/// An observer that logs pipeline events using the `tracing` crate
///
/// # Log Levels
///
/// - `on_step_start`: DEBUG
/// - `on_step_done`: INFO
/// - `on_step_failed`: WARN, or DEBUG when fatal since the error is returned
///   to the caller
/// - `on_step_skipped`: DEBUG
#[derive(Debug, Clone)]
pub struct TracingObserver {
    /// Project the pipeline is creating (for log context)
    project: String,
}

impl TracingObserver {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

impl PipelineObserver for TracingObserver {
    fn on_step_start(&self, step: &Step) {
        debug!(project = %self.project, "Starting: {}", step);
    }

    fn on_step_done(&self, step: &Step) {
        info!(project = %self.project, "Done: {}", step);
    }

    fn on_step_failed(&self, step: &Step, error: &Error, fatal: bool) {
        if fatal {
            debug!(project = %self.project, "Aborted at '{}': {}", step, error);
        } else {
            warn!(project = %self.project, "Could not {}: {}", step, error);
        }
    }

    fn on_step_skipped(&self, step: &Step) {
        debug!(project = %self.project, "Skipped: {}", step);
    }
}
