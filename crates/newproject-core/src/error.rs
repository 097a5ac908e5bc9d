//! Error types for newproject-core

use crate::schema::ConfigDiagnostic;
use thiserror::Error;

/// Result type alias using newproject-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for newproject
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Schema validation error
    #[error("Schema validation failed:\n{}", render_diagnostics(.diagnostics))]
    SchemaValidation { diagnostics: Vec<ConfigDiagnostic> },

    /// Schema not found
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a schema validation error from a list of diagnostics
    pub fn schema_validation(diagnostics: Vec<ConfigDiagnostic>) -> Self {
        Self::SchemaValidation { diagnostics }
    }

    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }

    /// Diagnostics carried by a schema validation failure, empty otherwise
    pub fn diagnostics(&self) -> &[ConfigDiagnostic] {
        match self {
            Self::SchemaValidation { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

fn render_diagnostics(diagnostics: &[ConfigDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  - {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}
