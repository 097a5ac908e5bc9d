//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::schema::{ConfigValidator, CONFIG_SCHEMA};
use crate::types::{KindSettings, NewprojectConfigFile, ProjectKind};
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_json::Value;
use std::fs;
use tracing::debug;

/// Configuration file name searched for in the user config directories
pub const CONFIG_FILE_NAME: &str = "newproject_config.yaml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "NEWPROJECT_CONFIG";

/// Environment variable overriding the development root
pub const DEV_ROOT_ENV: &str = "NEWPROJECT_DEV_ROOT";

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// The default configuration compiled into the binary
pub fn embedded_default_config() -> Result<String> {
    let file = EmbeddedConfigs::get(CONFIG_FILE_NAME)
        .ok_or_else(|| Error::config_not_found(format!("<embedded>/{}", CONFIG_FILE_NAME)))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|_| Error::invalid_config("Embedded configuration is not valid UTF-8"))
}

/// Where a configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(Utf8PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path),
            Self::Embedded => write!(f, "<built-in default>"),
        }
    }
}

/// Loaded and validated newproject configuration
///
/// Immutable once built; the dispatcher borrows it for the whole invocation.
#[derive(Debug, Clone)]
pub struct NewprojectConfig {
    /// The parsed configuration
    pub config: NewprojectConfigFile,

    /// Where the configuration came from
    pub source: ConfigSource,

    /// Resolved development root
    pub dev_root: Utf8PathBuf,
}

impl NewprojectConfig {
    /// Locate, validate and parse the configuration
    ///
    /// Lookup order: `path`, then `$NEWPROJECT_CONFIG`, then the user config
    /// directories, then the built-in default.
    pub fn load(path: Option<&Utf8Path>, validator: &ConfigValidator) -> Result<Self> {
        let (source, content) = Self::locate(path)?;
        debug!("Loading configuration from {}", source);
        Self::from_yaml(&content, source, validator)
    }

    /// Validate and parse configuration text
    ///
    /// Schema validation runs before any typed parsing; an invalid document
    /// never produces a configuration.
    pub fn from_yaml(content: &str, source: ConfigSource, validator: &ConfigValidator) -> Result<Self> {
        let value: Value = serde_yaml_ng::from_str(content)?;

        validator.validate(&value, CONFIG_SCHEMA)?;

        let config = NewprojectConfigFile::from_value(&value)?;
        let dev_root = Self::resolve_dev_root(&config.development_dir_path)?;

        Ok(Self {
            config,
            source,
            dev_root,
        })
    }

    fn locate(path: Option<&Utf8Path>) -> Result<(ConfigSource, String)> {
        if let Some(p) = path {
            return Ok((ConfigSource::File(p.to_owned()), read_config(p)?));
        }

        if let Ok(p) = std::env::var(CONFIG_ENV) {
            if !p.is_empty() {
                let p = Utf8PathBuf::from(p);
                let content = read_config(&p)?;
                return Ok((ConfigSource::File(p), content));
            }
        }

        for candidate in Self::candidate_paths() {
            if candidate.is_file() {
                let content = fs::read_to_string(&candidate)?;
                return Ok((ConfigSource::File(candidate), content));
            }
        }

        Ok((ConfigSource::Embedded, embedded_default_config()?))
    }

    /// User configuration files checked when no explicit path is given
    pub fn candidate_paths() -> Vec<Utf8PathBuf> {
        let mut paths = Vec::new();

        if let Ok(home) = get_home_dir() {
            paths.push(home.join(".config").join("newproject").join(CONFIG_FILE_NAME));
        }

        if let Some(dir) = dirs::config_dir().and_then(|d| Utf8PathBuf::from_path_buf(d).ok()) {
            let path = dir.join("newproject").join(CONFIG_FILE_NAME);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        paths
    }

    /// Resolve the development root
    ///
    /// `$NEWPROJECT_DEV_ROOT` wins; otherwise relative paths are taken from
    /// the home directory and absolute paths are used as-is.
    pub fn resolve_dev_root(development_dir_path: &str) -> Result<Utf8PathBuf> {
        if let Ok(root) = std::env::var(DEV_ROOT_ENV) {
            if !root.is_empty() {
                return Ok(Utf8PathBuf::from(root));
            }
        }

        let path = Utf8Path::new(development_dir_path);
        if path.is_absolute() {
            Ok(path.to_owned())
        } else {
            Ok(get_home_dir()?.join(path))
        }
    }

    /// Replace the development root
    pub fn with_dev_root(mut self, dev_root: impl Into<Utf8PathBuf>) -> Self {
        self.dev_root = dev_root.into();
        self
    }

    /// Get the inner configuration file
    pub fn inner(&self) -> &NewprojectConfigFile {
        &self.config
    }

    /// Get the development root
    pub fn dev_root(&self) -> &Utf8Path {
        &self.dev_root
    }

    /// Get the settings of a kind
    pub fn settings(&self, kind: ProjectKind) -> Option<&KindSettings> {
        self.config.kind(kind)
    }

    /// Folder holding projects of a kind
    pub fn kind_folder(&self, kind: ProjectKind) -> Option<Utf8PathBuf> {
        self.settings(kind)
            .map(|s| self.dev_root.join(&s.projects_dir_name))
    }

    /// `.gitignore` body for a kind, falling back to the default body
    pub fn gitignore_content(&self, kind: ProjectKind) -> &str {
        self.settings(kind)
            .and_then(|s| s.gitignore_content.as_deref())
            .filter(|c| !c.is_empty())
            .unwrap_or(self.config.default_gitignore_content.as_str())
    }
}

fn read_config(path: &Utf8Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config_not_found(path.as_str())
        } else {
            Error::Io(e)
        }
    })
}
