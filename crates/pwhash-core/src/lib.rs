//! # pwhash Core
//!
//! Argon2id password encoding compatible with Spring Security's
//! `Argon2PasswordEncoder`, as used by the Halo blogging platform.
//!
//! This crate holds the encoder and its parameter profiles independent of the
//! CLI that reads passwords from a terminal.
//!
//! ## Architecture
//!
//! - **params**: pinned Argon2 parameter profiles
//! - **salt**: random salt generation
//! - **encoder**: encoding, verification and upgrade checks
//! - **decode**: parsing of stored PHC strings

pub mod decode;
pub mod encoder;
pub mod error;
pub mod params;
pub mod salt;

pub use decode::DecodedHash;
pub use encoder::{decode, encode, verify, PasswordEncoder};
pub use error::{PwhashError, Result};
pub use params::EncoderParams;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
