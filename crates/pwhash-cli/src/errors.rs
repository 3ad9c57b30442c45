//! CLI error types for structured error handling.
//!
//! Each variant maps to a specific exit code so scripts can tell a missing
//! password apart from a hashing failure.

use std::fmt;

use pwhash_core::PwhashError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Nothing usable on standard input
    InvalidInput { message: String, hint: String },

    /// Salt generation or hashing failed
    HashFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::HashFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error with message and hint.
    pub fn invalid_input(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::HashFailed(_) => exit_codes::HASH_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<PwhashError> for CliError {
    fn from(err: PwhashError) -> Self {
        CliError::HashFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_exit_codes() {
        let err = CliError::invalid_input("No password provided", "Hint: pipe one line");
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);

        let err: CliError = PwhashError::Randomness("no entropy".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::HASH_FAILED);
    }

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::invalid_input("No password provided", "Hint: pipe one line");
        assert_eq!(err.to_string(), "No password provided\nHint: pipe one line");
    }

    #[test]
    fn test_randomness_failure_message_preserved() {
        let err: CliError = PwhashError::Randomness("no entropy".to_string()).into();
        assert!(err.to_string().contains("Secure randomness unavailable"));
    }
}
