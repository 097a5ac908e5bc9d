//! # newproject-scaffold
//!
//! Project scaffolding library for the newproject CLI providing:
//! - Precondition checks on the development root, kind folder and name
//! - Step primitives (directories, files, git, venv, editors)
//! - The templated, delegated and multi-file creation strategies
//! - A dispatcher that runs one request end to end
//!
//! # Example
//!
//! ```no_run
//! use newproject_core::{ConfigValidator, NewprojectConfig, ProjectKind};
//! use newproject_scaffold::{Dispatcher, ProjectRequest, SystemToolRunner};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ConfigValidator::new()?;
//! let config = NewprojectConfig::load(None, &validator)?;
//! let runner = SystemToolRunner;
//!
//! let report = Dispatcher::new(&config, &runner)
//!     .dispatch(&ProjectRequest::new(ProjectKind::Go, "demo"))?;
//! println!("created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;
pub mod error;
pub mod guard;
pub mod observer;
pub mod platform;
pub mod report;
pub mod steps;
pub mod strategy;

pub use dispatcher::{Dispatcher, ProjectRequest};
pub use error::{Error, Result};
pub use guard::PathGuard;
pub use observer::{NoOpObserver, PipelineObserver, TracingObserver};
pub use platform::Platform;
pub use report::{CreationReport, Step, StepOutcome, StepRecord};
pub use steps::{SystemToolRunner, ToolOutput, ToolRunner};
pub use strategy::CreationStrategy;
