//! Configuration file structure
//!
//! ```json
//! {
//!   "parser": "native",
//!   "log_level": "info",
//!   "array_types": [
//!     { "name": "box", "delimiter": ";" },
//!     { "name": "int4" }
//!   ]
//! }
//! ```
//!
//! Every field is optional.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigResult};
use crate::array::{delimiter_conflict, ArrayConfig, ParserKind, DEFAULT_DELIMITER};
use crate::observability::{emit, Event, Logger, Severity};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarshalConfig {
    /// Array parser strategy (default "native")
    #[serde(default)]
    pub parser: ParserKind,

    /// Minimum log severity (default "info")
    #[serde(default)]
    pub log_level: Severity,

    /// Delimiter overrides per element type; unlisted types use the
    /// built-in table
    #[serde(default)]
    pub array_types: Vec<ArrayTypeConfig>,
}

/// Delimiter binding for one array element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayTypeConfig {
    pub name: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl ArrayTypeConfig {
    pub fn new(name: impl Into<String>, delimiter: char) -> Self {
        Self {
            name: name.into(),
            delimiter: delimiter.to_string(),
        }
    }

    /// Validated delimiter character
    pub fn delimiter_char(&self) -> ConfigResult<char> {
        let mut chars = self.delimiter.chars();
        let delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ConfigError::invalid_delimiter(
                    &self.name,
                    format!("must be a single character, got {:?}", self.delimiter),
                ))
            }
        };

        match delimiter_conflict(delimiter) {
            Some(reason) => Err(ConfigError::invalid_delimiter(
                &self.name,
                format!("{:?}: {}", delimiter, reason),
            )),
            None => Ok(delimiter),
        }
    }

    /// Convert into the codec's configuration
    pub fn to_array_config(&self) -> ConfigResult<ArrayConfig> {
        Ok(ArrayConfig::new(self.name.clone(), self.delimiter_char()?))
    }
}

impl MarshalConfig {
    /// Parse and validate configuration from JSON text
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: MarshalConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;

        let path_str = path.display().to_string();
        let count = config.array_types.len().to_string();
        emit(
            Event::ConfigLoaded,
            &[
                ("array_types", count.as_str()),
                ("parser", config.parser.as_str()),
                ("path", path_str.as_str()),
            ],
        );
        Ok(config)
    }

    /// Check delimiters and type names
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.array_types {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyTypeName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateType(entry.name.clone()));
            }
            entry.delimiter_char()?;
        }
        Ok(())
    }

    /// Install the configured log threshold process-wide
    pub fn apply_logging(&self) {
        Logger::set_threshold(self.log_level);
    }
}
