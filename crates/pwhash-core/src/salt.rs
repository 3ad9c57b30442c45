//! Salt generation from the operating system's secure random source.

use argon2::password_hash::SaltString;
use zeroize::Zeroizing;

use crate::error::{PwhashError, Result};
use crate::params::MAX_SALT_LENGTH;

/// Fill `length` bytes from the OS CSPRNG and encode them as a PHC salt.
///
/// A failing random source is reported as `PwhashError::Randomness`; there is
/// no fallback to a weaker generator.
pub fn generate_salt(length: usize) -> Result<SaltString> {
    let mut buf = Zeroizing::new([0u8; MAX_SALT_LENGTH]);
    let bytes = buf
        .get_mut(..length)
        .ok_or_else(|| PwhashError::InvalidParams(format!("salt length {} too large", length)))?;
    getrandom::getrandom(bytes)?;
    encode_salt(bytes)
}

/// Encode raw salt bytes as unpadded base64.
pub(crate) fn encode_salt(bytes: &[u8]) -> Result<SaltString> {
    SaltString::encode_b64(bytes).map_err(|e| PwhashError::InvalidParams(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_length_in_encoding() {
        // 16 bytes -> 22 base64 characters without padding
        let salt = generate_salt(16).unwrap();
        assert_eq!(salt.as_str().len(), 22);
        assert!(!salt.as_str().contains('='));
    }

    #[test]
    fn test_salts_differ() {
        let a = generate_salt(16).unwrap();
        let b = generate_salt(16).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_oversized_salt_rejected() {
        let result = generate_salt(MAX_SALT_LENGTH + 1);
        assert!(matches!(result, Err(PwhashError::InvalidParams(_))));
    }

    #[test]
    fn test_encode_salt_fixed_bytes() {
        let salt = encode_salt(&[0u8; 16]).unwrap();
        assert_eq!(salt.as_str(), "AAAAAAAAAAAAAAAAAAAAAA");
    }
}
