//! Command implementations

pub mod config;
pub mod kinds;
pub mod new;

use anyhow::Result;
use camino::Utf8Path;
use newproject_core::{ConfigValidator, NewprojectConfig};

/// Locate, validate and parse the configuration
pub(crate) fn load_config(path: Option<&Utf8Path>) -> Result<NewprojectConfig> {
    let validator = ConfigValidator::new()?;
    Ok(NewprojectConfig::load(path, &validator)?)
}
