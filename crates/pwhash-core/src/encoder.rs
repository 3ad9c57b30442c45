//! Argon2id password encoder.
//!
//! Produces self-describing PHC strings and checks plaintexts against them.
//! Verification reads algorithm, version and costs from the stored string,
//! so hashes written under an older profile keep verifying after the
//! encoder's parameters change.

use argon2::password_hash::{Output, PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Version};
use log::{debug, warn};
use zeroize::Zeroizing;

use crate::decode::DecodedHash;
use crate::error::Result;
use crate::params::EncoderParams;
use crate::salt::generate_salt;

/// Argon2id encoder with a fixed parameter set.
#[derive(Debug, Clone)]
pub struct PasswordEncoder {
    params: EncoderParams,
    argon2: Argon2<'static>,
}

impl PasswordEncoder {
    /// Build an encoder, rejecting parameter sets Argon2 cannot run.
    pub fn new(params: EncoderParams) -> Result<Self> {
        let argon2_params = params.to_argon2()?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);
        Ok(Self { params, argon2 })
    }

    /// Encoder matching Spring Security 5.8 defaults.
    pub fn spring_v5_8() -> Self {
        Self::new(EncoderParams::spring_v5_8()).expect("Spring 5.8 profile is valid")
    }

    pub fn params(&self) -> &EncoderParams {
        &self.params
    }

    /// Hash `plaintext` under a fresh random salt.
    ///
    /// The empty string is a valid input. The only expected failure is an
    /// unavailable random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use pwhash_core::PasswordEncoder;
    ///
    /// let encoder = PasswordEncoder::spring_v5_8();
    /// let encoded = encoder.encode("hunter2").unwrap();
    /// assert!(encoded.starts_with("$argon2id$v=19$m=16384,t=2,p=1$"));
    /// assert!(encoder.matches("hunter2", &encoded));
    /// ```
    pub fn encode(&self, plaintext: &str) -> Result<String> {
        let salt = generate_salt(self.params.salt_length)?;
        self.encode_with_salt(plaintext, &salt)
    }

    pub(crate) fn encode_with_salt(&self, plaintext: &str, salt: &SaltString) -> Result<String> {
        debug!(
            "Hashing with argon2id m={} t={} p={}",
            self.params.memory_kib, self.params.iterations, self.params.parallelism
        );
        let hash = self.argon2.hash_password(plaintext.as_bytes(), salt)?;
        Ok(hash.to_string())
    }

    /// Check `plaintext` against a stored encoded hash.
    ///
    /// Never fails: an empty, malformed or non-Argon2 stored value is logged
    /// and treated as a mismatch.
    pub fn matches(&self, plaintext: &str, encoded: &str) -> bool {
        if encoded.is_empty() {
            warn!("Password hash is empty");
            return false;
        }

        let decoded = match DecodedHash::parse(encoded) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!("Stored password hash is not a valid Argon2 encoding: {}", err);
                return false;
            }
        };

        // Recompute under the stored algorithm, version and costs
        let argon2 = Argon2::new(
            decoded.algorithm(),
            decoded.version(),
            decoded.params().clone(),
        );
        let mut key = Zeroizing::new(vec![0u8; decoded.hash().len()]);
        if let Err(err) = argon2.hash_password_into(plaintext.as_bytes(), decoded.salt(), &mut key) {
            warn!("Password verification failed: {}", err);
            return false;
        }

        match (Output::new(&key), Output::new(decoded.hash())) {
            // Output equality is constant-time
            (Ok(actual), Ok(expected)) => actual == expected,
            _ => false,
        }
    }

    /// Whether a stored hash was written with lower memory or iteration
    /// costs than this encoder uses.
    ///
    /// An empty value returns `false`; an unparsable one is an error.
    pub fn upgrade_encoding(&self, encoded: &str) -> Result<bool> {
        if encoded.is_empty() {
            warn!("Password hash is empty");
            return Ok(false);
        }

        let decoded = decode(encoded)?;
        Ok(decoded.memory_kib() < self.params.memory_kib
            || decoded.iterations() < self.params.iterations)
    }
}

impl Default for PasswordEncoder {
    fn default() -> Self {
        Self::spring_v5_8()
    }
}

/// Parse an encoded hash into its components.
pub fn decode(encoded: &str) -> Result<DecodedHash> {
    DecodedHash::parse(encoded)
}

/// Hash `plaintext` with the Spring Security 5.8 profile.
pub fn encode(plaintext: &str) -> Result<String> {
    PasswordEncoder::spring_v5_8().encode(plaintext)
}

/// Check `plaintext` against `encoded` using the parameters stored in it.
pub fn verify(plaintext: &str, encoded: &str) -> bool {
    PasswordEncoder::spring_v5_8().matches(plaintext, encoded)
}
