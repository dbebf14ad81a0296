//! PostgreSQL adapter
//!
//! Decorates a base adapter: integer limit sizing and bytea decoding are
//! PostgreSQL-specific, everything else is delegated unchanged. Also the
//! entry point for default extraction and array codecs keyed by type name.

use std::sync::LazyLock;

use regex::Regex;

use super::base::{BaseAdapter, Quoting, TypeIntrospection};
use super::bytea;
use super::errors::AdapterResult;
use crate::array::ArrayCodec;
use crate::config::ArrayTypeRegistry;
use crate::defaults::{self, DefaultSpec, DefaultValueExtractor};
use crate::patterns::static_regex;

static EIGHT_BYTE_INT: LazyLock<Regex> =
    LazyLock::new(|| static_regex(r"(?i)\A(?:bigint|int8)"));

static TWO_BYTE_INT: LazyLock<Regex> = LazyLock::new(|| static_regex(r"(?i)\Asmallint"));

/// PostgreSQL specialisation over `B`
#[derive(Debug, Clone)]
pub struct PostgresAdapter<B = BaseAdapter> {
    base: B,
    registry: ArrayTypeRegistry,
    defaults: &'static DefaultValueExtractor,
}

impl PostgresAdapter<BaseAdapter> {
    pub fn new(registry: ArrayTypeRegistry) -> Self {
        Self::wrap(BaseAdapter, registry)
    }
}

impl Default for PostgresAdapter<BaseAdapter> {
    fn default() -> Self {
        Self::new(ArrayTypeRegistry::default())
    }
}

impl<B> PostgresAdapter<B> {
    /// Wrap an arbitrary base
    pub fn wrap(base: B, registry: ArrayTypeRegistry) -> Self {
        Self {
            base,
            registry,
            defaults: defaults::shared(),
        }
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn registry(&self) -> &ArrayTypeRegistry {
        &self.registry
    }

    /// Codec for arrays of `type_name`
    pub fn array_codec(&self, type_name: &str) -> ArrayCodec {
        self.registry.codec_for(type_name)
    }

    /// Literal value of a column default definition
    pub fn extract_value_from_default(&self, default: &str) -> Option<String> {
        self.defaults.extract_value(default)
    }

    /// Full classification of a column default definition
    pub fn classify_default(&self, default: &str) -> DefaultSpec {
        self.defaults.classify(default)
    }

    pub fn has_default_function(&self, default_value: Option<&str>, default: &str) -> bool {
        self.defaults
            .is_function_derived(default_value.is_some(), default)
    }

    /// The default expression when it is function-derived
    pub fn extract_default_function(
        &self,
        default_value: Option<&str>,
        default: &str,
    ) -> Option<String> {
        self.defaults.default_function(default_value, default)
    }
}

impl<B: TypeIntrospection> TypeIntrospection for PostgresAdapter<B> {
    fn extract_limit(&self, sql_type: &str) -> Option<u32> {
        if EIGHT_BYTE_INT.is_match(sql_type) {
            Some(8)
        } else if TWO_BYTE_INT.is_match(sql_type) {
            Some(2)
        } else {
            self.base.extract_limit(sql_type)
        }
    }
}

impl<B: Quoting> Quoting for PostgresAdapter<B> {
    fn quote_ident(&self, name: &str) -> String {
        self.base.quote_ident(name)
    }

    fn quote_string(&self, value: &str) -> String {
        self.base.quote_string(value)
    }

    fn escape_bytea(&self, bytes: &[u8]) -> String {
        self.base.escape_bytea(bytes)
    }

    /// Decodes hex and escape format output
    fn unescape_bytea(&self, text: &str) -> AdapterResult<Vec<u8>> {
        bytea::decode(text)
    }
}
