//! Argon2 parameter profiles.
//!
//! Encoded hashes carry their own parameters, so a verifier on the other side
//! only interoperates if both sides agree on what gets written. The profiles
//! here are pinned to the published Spring Security values rather than the
//! `argon2` crate defaults (m=19456, t=2, p=1), which differ.

use argon2::Params;

use crate::error::{PwhashError, Result};

/// Smallest salt Argon2 accepts, in bytes.
pub const MIN_SALT_LENGTH: usize = 8;

/// Largest salt that fits the 64-character PHC salt field, in bytes.
pub const MAX_SALT_LENGTH: usize = 48;

/// Shortest derived key Argon2 produces, in bytes.
pub const MIN_HASH_LENGTH: usize = Params::MIN_OUTPUT_LEN;

/// Longest derived key the PHC output field holds, in bytes.
pub const MAX_HASH_LENGTH: usize = 64;

/// Tunable inputs of an Argon2id encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderParams {
    /// Random salt length in bytes
    pub salt_length: usize,
    /// Derived key length in bytes
    pub hash_length: usize,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
}

impl EncoderParams {
    /// Spring Security 5.8 defaults: 16 MiB, 2 passes, 1 lane.
    ///
    /// This is the profile Halo stores user passwords with.
    pub const fn spring_v5_8() -> Self {
        Self {
            salt_length: 16,
            hash_length: 32,
            parallelism: 1,
            memory_kib: 1 << 14,
            iterations: 2,
        }
    }

    /// Spring Security 5.2 defaults: 4 MiB, 3 passes, 1 lane.
    ///
    /// Kept for upgrade checks against hashes written by older deployments.
    pub const fn spring_v5_2() -> Self {
        Self {
            salt_length: 16,
            hash_length: 32,
            parallelism: 1,
            memory_kib: 1 << 12,
            iterations: 3,
        }
    }

    /// Check the lengths and build the `argon2` parameter block.
    ///
    /// Memory, iteration and lane limits are enforced by `argon2::Params`.
    pub fn to_argon2(&self) -> Result<Params> {
        if !(MIN_SALT_LENGTH..=MAX_SALT_LENGTH).contains(&self.salt_length) {
            return Err(PwhashError::InvalidParams(format!(
                "salt length must be between {} and {} bytes (got {})",
                MIN_SALT_LENGTH, MAX_SALT_LENGTH, self.salt_length
            )));
        }

        if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&self.hash_length) {
            return Err(PwhashError::InvalidParams(format!(
                "hash length must be between {} and {} bytes (got {})",
                MIN_HASH_LENGTH, MAX_HASH_LENGTH, self.hash_length
            )));
        }

        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(self.hash_length),
        )
        .map_err(|e| PwhashError::InvalidParams(e.to_string()))
    }
}

impl Default for EncoderParams {
    fn default() -> Self {
        Self::spring_v5_8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_v5_8_values() {
        let params = EncoderParams::spring_v5_8();
        assert_eq!(params.salt_length, 16);
        assert_eq!(params.hash_length, 32);
        assert_eq!(params.parallelism, 1);
        assert_eq!(params.memory_kib, 16384);
        assert_eq!(params.iterations, 2);
        assert_eq!(EncoderParams::default(), params);
    }

    #[test]
    fn test_spring_v5_2_values() {
        let params = EncoderParams::spring_v5_2();
        assert_eq!(params.memory_kib, 4096);
        assert_eq!(params.iterations, 3);
    }

    #[test]
    fn test_to_argon2_carries_costs() {
        let params = EncoderParams::spring_v5_8().to_argon2().unwrap();
        assert_eq!(params.m_cost(), 16384);
        assert_eq!(params.t_cost(), 2);
        assert_eq!(params.p_cost(), 1);
        assert_eq!(params.output_len(), Some(32));
    }

    #[test]
    fn test_short_salt_rejected() {
        let params = EncoderParams {
            salt_length: 4,
            ..EncoderParams::spring_v5_8()
        };
        let err = params.to_argon2().unwrap_err();
        assert!(matches!(err, PwhashError::InvalidParams(_)));
        assert!(err.to_string().contains("salt length"));
    }

    #[test]
    fn test_oversized_hash_rejected() {
        let params = EncoderParams {
            hash_length: 128,
            ..EncoderParams::spring_v5_8()
        };
        assert!(params
            .to_argon2()
            .unwrap_err()
            .to_string()
            .contains("hash length"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let params = EncoderParams {
            iterations: 0,
            ..EncoderParams::spring_v5_8()
        };
        assert!(matches!(
            params.to_argon2(),
            Err(PwhashError::InvalidParams(_))
        ));
    }
}
