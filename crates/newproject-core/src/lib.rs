//! # newproject-core
//!
//! Core library for the newproject CLI providing:
//! - Configuration file discovery and parsing (newproject_config.yaml)
//! - JSON Schema validation with per-key diagnostics
//! - Type definitions for project kinds, strategies and editors

pub mod config;
pub mod error;
pub mod schema;
pub mod types;
pub mod utils;

pub use config::{embedded_default_config, ConfigSource, NewprojectConfig};
pub use error::{Error, Result};
pub use schema::{ConfigDiagnostic, ConfigValidator, FaultKind};
pub use types::{
    CommandSpec, EditorChoice, FileSpec, KindSettings, ProjectKind, RuntimeEnv, StrategyTag,
};
pub use utils::{get_home_dir, render_template};
