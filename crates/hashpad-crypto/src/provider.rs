//! # Digest Provider Abstraction
//!
//! Abstracts digest computation behind a trait so the session layer can be
//! driven by the real SHA-256 backend in production and by failing or
//! instrumented providers in tests.
//!
//! ## Contract
//!
//! - Deterministic: identical input yields identical output.
//! - Input is fully buffered. There is no streaming interface; the practical
//!   limit is available memory.
//! - `Send + Sync`, so a provider can be moved onto the blocking pool.

use std::sync::Arc;

use hashpad_core::DigestBytes;

use crate::error::CryptoError;

/// Trait for digest backends.
pub trait DigestProvider: Send + Sync {
    /// Digest the full input.
    fn digest(&self, input: &[u8]) -> Result<DigestBytes, CryptoError>;

    /// Human-readable name for this provider (for diagnostics/logging).
    fn provider_name(&self) -> &str;
}

/// Digest the UTF-8 encoding of `text`.
pub fn digest_text(provider: &dyn DigestProvider, text: &str) -> Result<DigestBytes, CryptoError> {
    provider.digest(text.as_bytes())
}

/// Digest `data` on tokio's blocking pool.
///
/// This is the one suspension point of a hash request. It cannot be
/// cancelled once started: dropping the returned future detaches the task
/// but the digest still runs to completion.
///
/// # Errors
///
/// Returns the provider's own error, or `CryptoError::Task` if the blocking
/// task panicked.
pub async fn digest_off_thread(
    provider: Arc<dyn DigestProvider>,
    data: Vec<u8>,
) -> Result<DigestBytes, CryptoError> {
    let len = data.len();
    let name = provider.provider_name().to_string();
    tracing::debug!(provider = %name, bytes = len, "digest started");

    let result = tokio::task::spawn_blocking(move || provider.digest(&data))
        .await
        .map_err(|e| CryptoError::Task(e.to_string()))?;

    if result.is_ok() {
        tracing::debug!(provider = %name, bytes = len, "digest finished");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::{sha256_digest, Sha256Provider};

    struct FailingProvider;

    impl DigestProvider for FailingProvider {
        fn digest(&self, _input: &[u8]) -> Result<DigestBytes, CryptoError> {
            Err(CryptoError::Digest("unsupported context".into()))
        }

        fn provider_name(&self) -> &str {
            "FailingProvider"
        }
    }

    struct PanickingProvider;

    impl DigestProvider for PanickingProvider {
        fn digest(&self, _input: &[u8]) -> Result<DigestBytes, CryptoError> {
            panic!("backend exploded");
        }

        fn provider_name(&self) -> &str {
            "PanickingProvider"
        }
    }

    #[test]
    fn digest_text_hashes_utf8_bytes() {
        let provider = Sha256Provider::new();
        let d = digest_text(&provider, "héllo").unwrap();
        assert_eq!(d, sha256_digest("héllo".as_bytes()));
    }

    #[tokio::test]
    async fn off_thread_matches_inline() {
        let provider: Arc<dyn DigestProvider> = Arc::new(Sha256Provider::new());
        let data = vec![0x5a; 1 << 20];
        let off = digest_off_thread(provider, data.clone()).await.unwrap();
        assert_eq!(off, sha256_digest(&data));
    }

    #[tokio::test]
    async fn off_thread_propagates_provider_error() {
        let provider: Arc<dyn DigestProvider> = Arc::new(FailingProvider);
        let err = digest_off_thread(provider, b"abc".to_vec()).await.unwrap_err();
        assert!(matches!(err, CryptoError::Digest(_)));
    }

    #[tokio::test]
    async fn off_thread_maps_panic_to_task_error() {
        let provider: Arc<dyn DigestProvider> = Arc::new(PanickingProvider);
        let err = digest_off_thread(provider, Vec::new()).await.unwrap_err();
        assert!(matches!(err, CryptoError::Task(_)));
    }
}
