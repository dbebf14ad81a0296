//! Array type registry
//!
//! Resolves an element type name to its codec: configured overrides first,
//! then the built-in delimiter table. Each codec is built once per type name
//! and reused, so parser selection and its logging happen once.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use super::errors::ConfigResult;
use super::types::MarshalConfig;
use crate::array::{ArrayCodec, ArrayConfig, ParserKind};

/// Name -> delimiter bindings plus the parser strategy for every codec
#[derive(Default)]
pub struct ArrayTypeRegistry {
    overrides: HashMap<String, ArrayConfig>,
    parser: ParserKind,
    codecs: RwLock<HashMap<String, ArrayCodec>>,
}

impl ArrayTypeRegistry {
    /// Registry with only the built-in table
    pub fn new(parser: ParserKind) -> Self {
        Self {
            overrides: HashMap::new(),
            parser,
            codecs: RwLock::new(HashMap::new()),
        }
    }

    /// Registry from a validated configuration
    pub fn from_config(config: &MarshalConfig) -> ConfigResult<Self> {
        let mut registry = Self::new(config.parser);
        for entry in &config.array_types {
            registry.register(entry.to_array_config()?);
        }
        Ok(registry)
    }

    /// Add or replace a binding
    pub fn register(&mut self, config: ArrayConfig) {
        self.codecs
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&config.name);
        self.overrides.insert(config.name.clone(), config);
    }

    /// Name/delimiter pair for `type_name`
    pub fn config_for(&self, type_name: &str) -> ArrayConfig {
        self.overrides
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| ArrayConfig::for_type(type_name))
    }

    /// Codec for `type_name`, built on first use
    ///
    /// The cache only ever gains complete entries, so a poisoned lock still
    /// holds valid codecs.
    pub fn codec_for(&self, type_name: &str) -> ArrayCodec {
        if let Some(codec) = self
            .codecs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_name)
        {
            return codec.clone();
        }

        let mut codecs = self.codecs.write().unwrap_or_else(PoisonError::into_inner);
        codecs
            .entry(type_name.to_string())
            .or_insert_with(|| ArrayCodec::with_parser(self.config_for(type_name), self.parser))
            .clone()
    }

    pub fn parser(&self) -> ParserKind {
        self.parser
    }

    /// Number of codecs built so far
    pub fn cached_codecs(&self) -> usize {
        self.codecs.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Clone for ArrayTypeRegistry {
    fn clone(&self) -> Self {
        let codecs = self.codecs.read().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            overrides: self.overrides.clone(),
            parser: self.parser,
            codecs: RwLock::new(codecs),
        }
    }
}

impl fmt::Debug for ArrayTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayTypeRegistry")
            .field("overrides", &self.overrides)
            .field("parser", &self.parser)
            .field("cached_codecs", &self.cached_codecs())
            .finish()
    }
}
