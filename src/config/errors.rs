//! Configuration errors

use std::io;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Array type name cannot be empty")]
    EmptyTypeName,

    #[error("Duplicate array type: {0}")]
    DuplicateType(String),

    #[error("Invalid delimiter for array type '{name}': {reason}")]
    InvalidDelimiter { name: String, reason: String },
}

impl ConfigError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "PGM_CONFIG_IO",
            ConfigError::Json(_) => "PGM_CONFIG_MALFORMED",
            ConfigError::EmptyTypeName
            | ConfigError::DuplicateType(_)
            | ConfigError::InvalidDelimiter { .. } => "PGM_CONFIG_INVALID",
        }
    }

    pub(crate) fn invalid_delimiter(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidDelimiter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
