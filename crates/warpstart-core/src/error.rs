//! Error types for warpstart-core

use thiserror::Error;

/// Result type alias using warpstart-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for warpstart
#[derive(Error, Debug)]
pub enum Error {
    /// The registry file exists but does not hold a project mapping
    #[error("Project store is corrupt: {path}: {source}")]
    CorruptStore {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration value or file
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Invalid project name
    #[error("Invalid project name: {name:?}. Project names must not be empty")]
    InvalidProjectName { name: String },

    /// Workspace app selected without a workspace file
    #[error("The '{tag}' app requires a workspace file")]
    MissingWorkspace { tag: String },

    /// A value cannot be quoted into an invocation
    #[error("Cannot use {value:?} in an app invocation: {reason}")]
    UnquotableValue { value: String, reason: String },

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupt store error
    pub fn corrupt_store(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CorruptStore {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a missing workspace error
    pub fn missing_workspace(tag: impl Into<String>) -> Self {
        Self::MissingWorkspace { tag: tag.into() }
    }

    /// Create an unquotable value error
    pub fn unquotable_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnquotableValue {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
