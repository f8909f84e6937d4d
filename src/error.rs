//! Unified error types for the hash library

use thiserror::Error;

/// Main error type for the hash library
#[derive(Debug, Error)]
pub enum Sha256Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid digest length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

impl From<hex::FromHexError> for Sha256Error {
    fn from(e: hex::FromHexError) -> Self {
        Sha256Error::Parse(e.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Sha256Error>;
