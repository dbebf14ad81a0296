//! Array literal codec
//!
//! Encodes nested values into PostgreSQL's array literal text and decodes
//! that text back into nested strings and nulls.
//!
//! # Design Principles
//!
//! - Encoding always quotes scalars, so output is parseable for any input
//! - Only the bare `NULL` token is null; `"NULL"` is a string
//! - Decoding never coerces leaf types
//! - Malformed input is an error, never a partial result
//! - Nesting deeper than [`MAX_DEPTH`] is rejected
//! - Parser strategies are interchangeable
//!
//! ```
//! use pgmarshal::array::{ArrayCodec, ArrayConfig, ArrayValue};
//!
//! let codec = ArrayCodec::new(ArrayConfig::for_type("text"));
//! assert_eq!(codec.encode(&vec![None, Some("x")]), r#"{NULL,"x"}"#);
//! assert_eq!(
//!     codec.decode(r#"{NULL,"x"}"#).unwrap(),
//!     ArrayValue::from(vec![None, Some("x")]),
//! );
//! ```

mod codec;
mod encoder;
mod errors;
mod native;
mod parser;
mod reference;
mod value;

pub use codec::{
    decode_array, delimiter_conflict, encode_array, ArrayCodec, ArrayConfig, BOX_DELIMITER,
    DEFAULT_DELIMITER, RESERVED_DELIMITERS,
};
pub use encoder::{ArrayElement, ArrayEncoder, ElementWriter};
pub use errors::{ArrayResult, ParseError, ParseErrorKind};
pub use native::NativeParser;
pub use parser::{ArrayParser, ParserKind, MAX_DEPTH};
pub use reference::ReferenceParser;
pub use value::ArrayValue;
