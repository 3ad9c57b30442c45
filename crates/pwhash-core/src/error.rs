//! Error types for pwhash core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for pwhash operations.
pub type Result<T> = std::result::Result<T, PwhashError>;

/// Core error type for pwhash operations.
#[derive(Debug, Error)]
pub enum PwhashError {
    /// The operating system could not supply secure random bytes
    #[error("Secure randomness unavailable: {0}")]
    Randomness(String),

    /// Encoder parameters outside the range Argon2 accepts
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    /// Encoded hash string could not be parsed
    #[error("Malformed encoded hash: {0}")]
    MalformedHash(String),

    /// Key derivation failed
    #[error("Hashing error: {0}")]
    Hash(String),
}

impl From<getrandom::Error> for PwhashError {
    fn from(err: getrandom::Error) -> Self {
        PwhashError::Randomness(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for PwhashError {
    fn from(err: argon2::password_hash::Error) -> Self {
        PwhashError::Hash(err.to_string())
    }
}
