//! # Cryptographic Error Types
//!
//! Structured errors for digest computation. Uses `thiserror` for
//! ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from digest computation.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The provider could not produce a digest.
    #[error("digest computation failed: {0}")]
    Digest(String),

    /// The blocking task running the digest panicked or was cancelled.
    #[error("digest task did not complete: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_display() {
        let err = CryptoError::Digest("unsupported context".to_string());
        assert!(err.to_string().contains("unsupported context"));
    }

    #[test]
    fn task_display() {
        let err = CryptoError::Task("panicked".to_string());
        assert_eq!(err.to_string(), "digest task did not complete: panicked");
    }
}
