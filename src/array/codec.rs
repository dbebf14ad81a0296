//! Array codec bound to one element type and delimiter

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::encoder::{ArrayElement, ArrayEncoder};
use super::errors::ArrayResult;
use super::native::NativeParser;
use super::parser::{ArrayParser, ParserKind};
use super::reference::ReferenceParser;
use super::value::ArrayValue;
use crate::observability::{emit, Event};

/// Default element delimiter for almost every PostgreSQL type
pub const DEFAULT_DELIMITER: char = ',';

/// Element delimiter for `box`, whose text form already contains commas
pub const BOX_DELIMITER: char = ';';

/// Characters that collide with array literal structure
pub const RESERVED_DELIMITERS: [char; 4] = ['{', '}', '"', '\\'];

/// Why `delimiter` cannot separate elements, or `None` if it can
pub fn delimiter_conflict(delimiter: char) -> Option<&'static str> {
    if RESERVED_DELIMITERS.contains(&delimiter) {
        Some("reserved by the array literal syntax")
    } else if delimiter.is_whitespace() {
        Some("whitespace cannot delimit elements")
    } else {
        None
    }
}

/// Name/delimiter pair fixed for a codec's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Element type name, e.g. `int4` or `box`
    pub name: String,
    /// Element separator
    pub delimiter: char,
}

impl ArrayConfig {
    /// `delimiter` must pass [`delimiter_conflict`]; output written with a
    /// conflicting delimiter does not decode back to its input.
    pub fn new(name: impl Into<String>, delimiter: char) -> Self {
        Self {
            name: name.into(),
            delimiter,
        }
    }

    /// Config with the conventional delimiter for `name`
    pub fn for_type(name: impl Into<String>) -> Self {
        let name = name.into();
        let delimiter = if name == "box" {
            BOX_DELIMITER
        } else {
            DEFAULT_DELIMITER
        };
        Self { name, delimiter }
    }

    /// Whether encoded output round-trips through decoding
    pub fn is_valid(&self) -> bool {
        delimiter_conflict(self.delimiter).is_none()
    }
}

/// Encodes and decodes array literals for one [`ArrayConfig`]
///
/// Immutable after construction; cheap to clone and safe to share across
/// threads.
#[derive(Clone)]
pub struct ArrayCodec {
    config: ArrayConfig,
    encoder: ArrayEncoder,
    parser: Arc<dyn ArrayParser>,
}

impl ArrayCodec {
    /// Codec using the default (native) parser
    pub fn new(config: ArrayConfig) -> Self {
        Self::with_parser(config, ParserKind::default())
    }

    /// Codec using the requested parser strategy
    ///
    /// Falls back to the reference parser when the requested strategy cannot
    /// handle the configured delimiter.
    pub fn with_parser(config: ArrayConfig, kind: ParserKind) -> Self {
        let delimiter = config.delimiter.to_string();
        let mut parser = kind.build();
        if !parser.supports(config.delimiter) {
            emit(
                Event::ParserFallback,
                &[
                    ("name", config.name.as_str()),
                    ("delimiter", delimiter.as_str()),
                    ("requested", kind.as_str()),
                ],
            );
            parser = Arc::new(ReferenceParser);
        }

        emit(
            Event::CodecCreated,
            &[
                ("name", config.name.as_str()),
                ("delimiter", delimiter.as_str()),
                ("parser", parser.name()),
            ],
        );

        Self {
            encoder: ArrayEncoder::new(config.delimiter),
            config,
            parser,
        }
    }

    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn delimiter(&self) -> char {
        self.config.delimiter
    }

    /// Name of the active parser strategy
    pub fn parser_name(&self) -> &'static str {
        self.parser.name()
    }

    /// Encode a value (usually a nested sequence) as array literal text
    pub fn encode<T: ArrayElement + ?Sized>(&self, value: &T) -> String {
        self.encoder.encode(value)
    }

    /// Decode array literal text into nested strings and nulls
    pub fn decode(&self, text: &str) -> ArrayResult<ArrayValue> {
        self.parser.parse(text, self.config.delimiter)
    }

    /// Whether both codecs came from the same construction
    pub fn shares_parser(&self, other: &ArrayCodec) -> bool {
        Arc::ptr_eq(&self.parser, &other.parser)
    }
}

impl fmt::Debug for ArrayCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayCodec")
            .field("name", &self.config.name)
            .field("delimiter", &self.config.delimiter)
            .field("parser", &self.parser.name())
            .finish()
    }
}

/// Encode `value` with the delimiter of `config`
pub fn encode_array<T: ArrayElement + ?Sized>(config: &ArrayConfig, value: &T) -> String {
    ArrayEncoder::new(config.delimiter).encode(value)
}

/// Decode `text` with the delimiter of `config`
///
/// Uses the native parser, which defers to the reference parser for
/// non-ASCII delimiters.
pub fn decode_array(config: &ArrayConfig, text: &str) -> ArrayResult<ArrayValue> {
    NativeParser.parse(text, config.delimiter)
}
