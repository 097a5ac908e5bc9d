//! Project creation

use anyhow::Result;
use indicatif::ProgressBar;
use newproject_scaffold::{
    Dispatcher, Error as ScaffoldError, PipelineObserver, ProjectRequest, Step, SystemToolRunner,
    TracingObserver,
};
use std::sync::Mutex;
use thiserror::Error;

use crate::cli::Cli;
use crate::output;

/// Usage errors detected before any configuration is read
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("No project kind selected. Pass one kind flag, e.g. --python (see --list-kinds)")]
    NoKindSelected,
}

/// Build the creation request from the command line
///
/// clap only lets the name be absent alongside `--check-config` or
/// `--list-kinds`. Anything that reaches here without one carries an empty
/// name, which name validation rejects.
fn build_request(cli: &Cli) -> std::result::Result<ProjectRequest, UsageError> {
    let kind = cli.kinds.selected().ok_or(UsageError::NoKindSelected)?;
    let name = cli.project_name.clone().unwrap_or_default();
    Ok(ProjectRequest::new(kind, name).with_editor(cli.editors.selected()))
}

pub fn run(cli: &Cli) -> Result<()> {
    let request = build_request(cli)?;
    let config = super::load_config(cli.config.as_deref())?;

    let runner = SystemToolRunner;
    // Quiet runs keep step events in the log instead of the terminal
    let observer: Box<dyn PipelineObserver> = if cli.quiet {
        Box::new(TracingObserver::new(request.project_name.as_str()))
    } else {
        output::info(&format!(
            "Creating {} project '{}'",
            request.kind, request.project_name
        ));
        Box::new(ProgressObserver::new())
    };

    let report = Dispatcher::new(&config, &runner)
        .with_observer(observer.as_ref())
        .dispatch(&request)?;

    let failures = report.failures().count();
    if failures > 0 {
        output::warning(&format!(
            "{} created with {} failed step(s)",
            report.project_dir, failures
        ));
    } else if !cli.quiet {
        output::success(&format!("Project created at {}", report.project_dir));
        output::info("Happy coding!");
    }

    Ok(())
}

/// Prints one line per completed step and spins during long ones
///
/// Step failures are not printed here: non-fatal ones are logged by the
/// pipeline, the fatal one is reported once by `main`.
struct ProgressObserver {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressObserver {
    fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}

fn is_long_running(step: &Step) -> bool {
    matches!(step, Step::RuntimeEnv | Step::Generator { .. })
}

impl PipelineObserver for ProgressObserver {
    fn on_step_start(&self, step: &Step) {
        if !is_long_running(step) {
            return;
        }
        if let Ok(mut slot) = self.spinner.lock() {
            let message = format!("{}...", step);
            *slot = Some(output::spinner(&message));
        }
    }

    fn on_step_done(&self, step: &Step) {
        self.stop_spinner();
        if *step != Step::Preconditions {
            output::success(&step.to_string());
        }
    }

    fn on_step_failed(&self, _step: &Step, _error: &ScaffoldError, _fatal: bool) {
        self.stop_spinner();
    }
}
