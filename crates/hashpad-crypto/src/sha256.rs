//! # SHA-256 Digest Computation
//!
//! The production [`DigestProvider`]: SHA-256 over fully buffered input,
//! delegated to the `sha2` crate.

use hashpad_core::DigestBytes;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;
use crate::provider::DigestProvider;

/// Compute the SHA-256 digest of `data`.
pub fn sha256_digest(data: &[u8]) -> DigestBytes {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    DigestBytes::new(bytes)
}

/// SHA-256 backed by `sha2`. Stateless; cheap to clone and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Provider;

impl Sha256Provider {
    pub fn new() -> Self {
        Self
    }
}

impl DigestProvider for Sha256Provider {
    fn digest(&self, input: &[u8]) -> Result<DigestBytes, CryptoError> {
        Ok(sha256_digest(input))
    }

    fn provider_name(&self) -> &str {
        "Sha256Provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_vector_abc() {
        let d = sha256_digest(b"abc").encode();
        assert_eq!(
            d.hex().as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            d.base64().as_str(),
            "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
        );
    }

    #[test]
    fn known_vector_empty() {
        assert_eq!(
            sha256_digest(b"").to_hex().as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn provider_matches_free_function() {
        let provider = Sha256Provider::new();
        assert_eq!(provider.digest(b"xyz").unwrap(), sha256_digest(b"xyz"));
        assert_eq!(provider.provider_name(), "Sha256Provider");
    }

    proptest! {
        #[test]
        fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(sha256_digest(&data), sha256_digest(&data));
        }

        #[test]
        fn single_bit_flip_changes_digest(
            data in proptest::collection::vec(any::<u8>(), 1..256),
            idx in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let mut flipped = data.clone();
            let i = idx.index(flipped.len());
            flipped[i] ^= 1 << bit;
            prop_assert_ne!(sha256_digest(&data), sha256_digest(&flipped));
        }
    }
}
