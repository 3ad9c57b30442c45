//! Parsing of encoded Argon2 hash strings.
//!
//! The accepted format is the PHC string used by Spring Security and most
//! other Argon2 encoders:
//!
//! ```text
//! $argon2id$v=19$m=16384,t=2,p=1$<salt>$<hash>
//! ```
//!
//! Salt and hash are base64 without padding.

use argon2::password_hash::PasswordHash;
use argon2::{Algorithm, Params, Version};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{PwhashError, Result};
use crate::params::MAX_SALT_LENGTH;

/// Components of an encoded Argon2 hash.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DecodedHash {
    #[zeroize(skip)]
    algorithm: Algorithm,
    #[zeroize(skip)]
    version: Version,
    #[zeroize(skip)]
    params: Params,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl DecodedHash {
    /// Parse an encoded hash string.
    ///
    /// A missing `v=` segment means version 0x10, matching how older
    /// encoders wrote their output.
    pub fn parse(encoded: &str) -> Result<Self> {
        let parsed = PasswordHash::new(encoded)
            .map_err(|e| PwhashError::MalformedHash(e.to_string()))?;

        let algorithm = Algorithm::try_from(parsed.algorithm)
            .map_err(|_| PwhashError::MalformedHash(format!(
                "unsupported algorithm '{}'",
                parsed.algorithm
            )))?;

        let version = match parsed.version {
            Some(v) => Version::try_from(v)
                .map_err(|_| PwhashError::MalformedHash(format!("unsupported version {}", v)))?,
            None => Version::V0x10,
        };

        let params = Params::try_from(&parsed)
            .map_err(|e| PwhashError::MalformedHash(e.to_string()))?;

        let salt = parsed
            .salt
            .ok_or_else(|| PwhashError::MalformedHash("missing salt".to_string()))?;
        let mut salt_buf = [0u8; MAX_SALT_LENGTH];
        let salt = salt
            .decode_b64(&mut salt_buf)
            .map_err(|e| PwhashError::MalformedHash(format!("salt: {}", e)))?
            .to_vec();
        salt_buf.zeroize();

        let hash = parsed
            .hash
            .ok_or_else(|| PwhashError::MalformedHash("missing hash".to_string()))?
            .as_bytes()
            .to_vec();

        Ok(Self {
            algorithm,
            version,
            params,
            salt,
            hash,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Memory cost in KiB.
    pub fn memory_kib(&self) -> u32 {
        self.params.m_cost()
    }

    pub fn iterations(&self) -> u32 {
        self.params.t_cost()
    }

    pub fn parallelism(&self) -> u32 {
        self.params.p_cost()
    }

    /// Cost parameters with the output length of the stored hash.
    pub(crate) fn params(&self) -> &Params {
        &self.params
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Raw derived key bytes.
    ///
    /// Avoid storing or logging this value.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl std::fmt::Debug for DecodedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedHash")
            .field("algorithm", &self.algorithm)
            .field("version", &self.version)
            .field("memory_kib", &self.memory_kib())
            .field("iterations", &self.iterations())
            .field("parallelism", &self.parallelism())
            .field("salt_len", &self.salt.len())
            .field("hash", &"[REDACTED]")
            .finish()
    }
}
