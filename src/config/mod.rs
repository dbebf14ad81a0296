//! Configuration
//!
//! JSON configuration for array type delimiters, parser selection and log
//! threshold. Missing fields take defaults; invalid delimiters are rejected
//! at load time rather than at first decode.

mod errors;
mod registry;
mod types;

pub use errors::{ConfigError, ConfigResult};
pub use registry::ArrayTypeRegistry;
pub use types::{ArrayTypeConfig, MarshalConfig};
