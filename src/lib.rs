//! pgmarshal - PostgreSQL text marshalling
//!
//! Array literal codec and column default extraction, plus the thin adapter
//! collaborators (quoting, limit sizing, bytea) that sit around them.

pub mod adapter;
pub mod array;
pub mod config;
pub mod defaults;
pub mod observability;

mod patterns;

pub use array::{decode_array, encode_array, ArrayCodec, ArrayConfig, ArrayValue, ParseError};
pub use defaults::{extract_default, is_function_derived, DefaultSpec, DefaultValueExtractor};
