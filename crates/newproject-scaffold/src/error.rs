//! Error types for newproject-scaffold

use thiserror::Error;

/// Result type alias using newproject-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Development root does not exist
    #[error("Development directory does not exist: {path}. Change development_dir_path in the configuration file")]
    DevRootNotFound { path: String },

    /// Per-kind projects folder does not exist
    #[error("{kind} projects folder does not exist: {path}. Create it or change projects_dir_name in the configuration file")]
    KindFolderNotFound { kind: String, path: String },

    /// Project name rejected by the name check
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Project directory already exists
    #[error("Project already exists at: {path}")]
    AlreadyExists { path: String },

    /// Directory could not be created
    #[error("Cannot create directory {path}: {source}")]
    PermissionDenied {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool not found on the search path
    #[error("{tool}: command not found")]
    ToolNotFound { tool: String },

    /// External tool could not be spawned or exited unsuccessfully
    #[error("{tool} failed: {message}")]
    ToolExecutionFailed { tool: String, message: String },

    /// File could not be written
    #[error("Cannot write {path}: {source}")]
    IoWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Requested kind has no section in the configuration
    #[error("No configuration section for {kind} projects")]
    KindNotConfigured { kind: String },

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] newproject_core::Error),
}

impl Error {
    /// Create a dev root not found error
    pub fn dev_root_not_found(path: impl Into<String>) -> Self {
        Self::DevRootNotFound { path: path.into() }
    }

    /// Create a kind folder not found error
    pub fn kind_folder_not_found(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self::KindFolderNotFound {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error
    pub fn tool_execution_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolExecutionFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a kind not configured error
    pub fn kind_not_configured(kind: impl Into<String>) -> Self {
        Self::KindNotConfigured { kind: kind.into() }
    }

    /// Process exit status for this error when it ends an invocation
    ///
    /// Mirrors the errno values ENOENT (2), EEXIST (17) and EINVAL (22), and
    /// the shell's 127 for a missing command.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DevRootNotFound { .. } | Self::KindFolderNotFound { .. } => 2,
            Self::AlreadyExists { .. } => 17,
            Self::InvalidName { .. } => 22,
            Self::ToolNotFound { .. } => 127,
            Self::PermissionDenied { .. }
            | Self::ToolExecutionFailed { .. }
            | Self::IoWriteFailed { .. }
            | Self::KindNotConfigured { .. }
            | Self::Core(_) => 1,
        }
    }
}
