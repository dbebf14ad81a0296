//! Adapter errors

use thiserror::Error;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Failures decoding driver output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterError {
    #[error("Invalid bytea hex data: {0}")]
    ByteaHex(#[from] hex::FromHexError),

    #[error("Invalid bytea escape sequence at byte {position}")]
    ByteaEscape { position: usize },
}

impl AdapterError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            AdapterError::ByteaHex(_) => "PGM_BYTEA_INVALID_HEX",
            AdapterError::ByteaEscape { .. } => "PGM_BYTEA_INVALID_ESCAPE",
        }
    }
}
