//! JSON Schema validation for newproject configurations

use crate::error::{Error, Result};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{ValidationError, Validator};
use rust_embed::RustEmbed;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Name of the schema describing newproject_config.yaml
pub const CONFIG_SCHEMA: &str = "newproject_config";

/// Embedded schema files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../schemas/"]
#[prefix = ""]
struct EmbeddedSchemas;

/// What kind of rule a configuration value broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    /// A required field is absent
    Missing { field: String },
    /// A field has the wrong type
    TypeMismatch { field: String },
    /// Any other schema rule (pattern, enum, minLength, ...)
    Other,
}

/// One schema violation, located by its top-level configuration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Offending top-level key (`<root>` when the document itself is wrong)
    pub key: String,
    pub fault: FaultKind,
    /// Raw validator message
    pub message: String,
}

impl std::fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.fault {
            FaultKind::Missing { field } if *field == self.key => {
                write!(f, "{} (missing): {}", self.key, self.message)
            }
            FaultKind::Missing { field } => {
                write!(f, "{}: {} (missing): {}", self.key, field, self.message)
            }
            FaultKind::TypeMismatch { field } => {
                write!(f, "{}: {} (type error): {}", self.key, field, self.message)
            }
            FaultKind::Other => write!(f, "{}: {}", self.key, self.message),
        }
    }
}

impl ConfigDiagnostic {
    fn from_error(error: &ValidationError<'_>) -> Self {
        let segments = pointer_segments(&error.instance_path().to_string());
        let message = error.to_string();

        match error.kind() {
            ValidationErrorKind::Required { .. } => {
                let field = quoted_property(&message).unwrap_or_default();
                let key = segments.first().cloned().unwrap_or_else(|| field.clone());
                Self {
                    key,
                    fault: FaultKind::Missing { field },
                    message,
                }
            }
            ValidationErrorKind::Type { .. } => {
                let key = segments
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "<root>".to_string());
                let field = segments.last().cloned().unwrap_or_else(|| key.clone());
                Self {
                    key,
                    fault: FaultKind::TypeMismatch { field },
                    message,
                }
            }
            _ => Self {
                key: segments
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "<root>".to_string()),
                fault: FaultKind::Other,
                message,
            },
        }
    }
}

/// Split a JSON pointer into unescaped segments
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Extract `name` from a message shaped like `"name" is a required property`
fn quoted_property(message: &str) -> Option<String> {
    let rest = message.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// Configuration validator with pre-compiled schemas
#[derive(Debug)]
pub struct ConfigValidator {
    /// Compiled schemas by name
    schemas: HashMap<String, Validator>,
}

impl ConfigValidator {
    /// Create a new validator with embedded schemas
    pub fn new() -> Result<Self> {
        let mut schemas = HashMap::new();

        for file in EmbeddedSchemas::iter() {
            if file.ends_with(".schema.json") {
                let name = file.trim_end_matches(".schema.json").to_string();

                debug!("Loading embedded schema: {}", name);

                if let Some(content) = EmbeddedSchemas::get(&file) {
                    let json_str = std::str::from_utf8(&content.data).map_err(|_| {
                        Error::invalid_config(format!("Invalid UTF-8 in schema: {}", file))
                    })?;

                    let schema_value: Value = serde_json::from_str(json_str)?;
                    schemas.insert(name.clone(), compile(&name, &schema_value)?);
                }
            }
        }

        if schemas.is_empty() {
            debug!("No embedded schemas found, using fallback schema");
            schemas.insert(
                CONFIG_SCHEMA.to_string(),
                compile(CONFIG_SCHEMA, &fallback_config_schema())?,
            );
        }

        Ok(Self { schemas })
    }

    /// Create a validator from a single schema document
    pub fn from_schema(name: &str, schema: &Value) -> Result<Self> {
        let mut schemas = HashMap::new();
        schemas.insert(name.to_string(), compile(name, schema)?);
        Ok(Self { schemas })
    }

    /// Validate a parsed value against a schema
    ///
    /// Every violation is reported, not just the first one.
    pub fn validate(&self, value: &Value, schema_name: &str) -> Result<()> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| Error::schema_not_found(schema_name))?;

        let diagnostics: Vec<ConfigDiagnostic> = schema
            .iter_errors(value)
            .map(|e| ConfigDiagnostic::from_error(&e))
            .collect();

        if !diagnostics.is_empty() {
            return Err(Error::schema_validation(diagnostics));
        }

        Ok(())
    }
}

fn compile(name: &str, schema: &Value) -> Result<Validator> {
    jsonschema::validator_for(schema)
        .map_err(|e| Error::invalid_config(format!("Failed to compile schema {}: {}", name, e)))
}

/// Minimal schema used when the embedded one is unavailable
fn fallback_config_schema() -> Value {
    serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["development_dir_path"],
        "properties": {
            "development_dir_path": { "type": "string", "minLength": 1 },
            "default_gitignore_content": { "type": "string" }
        },
        "additionalProperties": {
            "type": "object",
            "required": ["projects_dir_name"],
            "properties": {
                "projects_dir_name": { "type": "string", "minLength": 1 }
            }
        }
    })
}
