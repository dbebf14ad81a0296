//! Generic SQL adapter behaviour
//!
//! [`BaseAdapter`] is what a driver-agnostic adapter does; database-specific
//! adapters wrap it and override only what differs.

use std::sync::LazyLock;

use regex::Regex;

use super::bytea;
use super::errors::AdapterResult;
use crate::patterns::static_regex;

/// Identifier and literal quoting
pub trait Quoting {
    /// `"name"`, with interior double quotes doubled
    fn quote_ident(&self, name: &str) -> String;

    /// Escape the body of a single-quoted string literal
    fn quote_string(&self, value: &str) -> String;

    /// Text form of binary data for a bytea literal
    fn escape_bytea(&self, bytes: &[u8]) -> String;

    /// Binary data from the driver's bytea output
    fn unescape_bytea(&self, text: &str) -> AdapterResult<Vec<u8>>;
}

/// Column type introspection
pub trait TypeIntrospection {
    /// Storage limit declared by a SQL type, e.g. 255 for `varchar(255)`
    fn extract_limit(&self, sql_type: &str) -> Option<u32>;
}

static BIGINT: LazyLock<Regex> = LazyLock::new(|| static_regex(r"(?i)\Abigint"));

/// Leading integer of the first parenthesised modifier list
static TYPE_MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"\A[^(]*\(\s*([0-9]+)[^)]*\)"));

/// Driver-agnostic behaviour
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseAdapter;

impl Quoting for BaseAdapter {
    fn quote_ident(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn quote_string(&self, value: &str) -> String {
        value.replace('\'', "''")
    }

    fn escape_bytea(&self, bytes: &[u8]) -> String {
        bytea::encode_hex(bytes)
    }

    /// No driver-specific format: the text's bytes
    fn unescape_bytea(&self, text: &str) -> AdapterResult<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

impl TypeIntrospection for BaseAdapter {
    fn extract_limit(&self, sql_type: &str) -> Option<u32> {
        if BIGINT.is_match(sql_type) {
            return Some(8);
        }
        TYPE_MODIFIER
            .captures(sql_type)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// `"name"`, with interior double quotes doubled
pub fn quote_ident(name: &str) -> String {
    BaseAdapter.quote_ident(name)
}
