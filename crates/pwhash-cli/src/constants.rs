//! Constants used throughout the CLI.

/// Prompt printed before reading the password.
pub const PROMPT: &str = "Enter new password:";

/// Label preceding the encoded hash on the result line.
pub const RESULT_LABEL: &str = "Encoded password:";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No password could be read from standard input.
    pub const INVALID_INPUT: i32 = 4;

    /// Salt generation or key derivation failed.
    pub const HASH_FAILED: i32 = 6;
}
