//! Configuration types for newproject_config.yaml

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::kind::ProjectKind;
use crate::error::{Error, Result};

/// Root newproject_config.yaml configuration
#[derive(Debug, Clone, PartialEq)]
pub struct NewprojectConfigFile {
    /// Development root, relative to the home directory unless absolute
    pub development_dir_path: String,

    /// Ignore-file body used by kinds that do not set their own
    pub default_gitignore_content: String,

    /// Per-kind settings keyed by kind
    pub kinds: BTreeMap<ProjectKind, KindSettings>,
}

/// Root keys that are not kind sections
#[derive(Debug, Deserialize)]
struct RootKeys {
    development_dir_path: String,
    #[serde(default)]
    default_gitignore_content: String,
}

impl NewprojectConfigFile {
    /// Build the typed configuration from an already parsed document
    ///
    /// Kind sections are looked up by [`ProjectKind::config_key`]; a kind
    /// without a section is left unconfigured.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid_config(
                "configuration root must be a mapping",
            ));
        }

        let root: RootKeys = serde_json::from_value(value.clone())?;

        let mut kinds = BTreeMap::new();
        for kind in ProjectKind::ALL {
            if let Some(section) = value.get(kind.config_key()) {
                let settings: KindSettings =
                    serde_json::from_value(section.clone()).map_err(|e| {
                        Error::invalid_config(format!("{}: {}", kind.config_key(), e))
                    })?;
                kinds.insert(kind, settings);
            }
        }

        Ok(Self {
            development_dir_path: root.development_dir_path,
            default_gitignore_content: root.default_gitignore_content,
            kinds,
        })
    }

    /// Get the settings of a kind
    pub fn kind(&self, kind: ProjectKind) -> Option<&KindSettings> {
        self.kinds.get(&kind)
    }
}

/// Settings of one project kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSettings {
    /// Folder under the development root holding projects of this kind
    pub projects_dir_name: String,

    /// Starter file name (templated kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Starter file content (templated kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,

    /// Files written by the multi-file strategy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSpec>,

    /// `.gitignore` body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitignore_content: Option<String>,

    /// External generator (delegated kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandSpec>,
}

impl KindSettings {
    /// Settings with only the folder name set
    pub fn new(projects_dir_name: impl Into<String>) -> Self {
        Self {
            projects_dir_name: projects_dir_name.into(),
            file_name: None,
            file_content: None,
            files: Vec::new(),
            gitignore_content: None,
            command: None,
        }
    }
}

/// A file to write, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// Program and leading arguments of an external generator
///
/// The project directory is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}
