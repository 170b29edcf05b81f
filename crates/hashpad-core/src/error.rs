//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used by `hashpad-core`. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Most user-facing failures in hashpad are not errors at all: an empty
//! input, an unrecognized pasted digest, or a corrupt history file are
//! modelled as ordinary outcomes. What remains here is parsing of digest
//! text and the storage backend.

use thiserror::Error;

/// Top-level error type for hashpad-core.
#[derive(Error, Debug)]
pub enum HashpadError {
    /// A digest string did not have the required shape.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    /// A history entry carried hex and base64 forms of different bytes.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Keys become file names, so path separators and dots are refused.
    #[error("invalid storage key {0:?}: must match [A-Za-z0-9_-]+")]
    InvalidKey(String),

    /// The stored value is not UTF-8.
    #[error("stored value for {key:?} is not valid UTF-8")]
    NotUtf8 {
        /// The key whose value failed to decode.
        key: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_display() {
        let err = StorageError::InvalidKey("../etc".to_string());
        let msg = err.to_string();
        assert!(msg.contains("../etc"));
        assert!(msg.contains("[A-Za-z0-9_-]+"));
    }

    #[test]
    fn storage_error_converts_into_top_level() {
        let err: HashpadError = StorageError::NotUtf8 {
            key: "k".to_string(),
        }
        .into();
        assert!(matches!(err, HashpadError::Storage(_)));
        assert!(err.to_string().starts_with("storage error:"));
    }
}
