//! Adapter collaborators
//!
//! Thin behaviour around the codec and extractor: identifier and string
//! quoting, bytea text formats, and declared-limit sizing. Composition, not
//! inheritance: [`PostgresAdapter`] wraps any base implementing the traits
//! and overrides only integer limits and bytea decoding.

mod base;
mod bytea;
mod errors;
mod postgres;

pub use base::{quote_ident, BaseAdapter, Quoting, TypeIntrospection};
pub use bytea::{decode as decode_bytea, encode_hex as encode_bytea_hex};
pub use errors::{AdapterError, AdapterResult};
pub use postgres::PostgresAdapter;
