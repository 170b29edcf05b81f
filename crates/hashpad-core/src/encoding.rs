//! # Encoder/Formatter
//!
//! Textual renderings of raw digest bytes: lowercase hexadecimal and
//! standard (RFC 4648, padded) base64. Neither rendering can fail for
//! well-formed byte input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::HashpadError;

/// Render bytes as lowercase hex, two characters per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Render bytes as standard base64 with `=` padding.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard padded base64.
///
/// Used when re-validating persisted history entries; pasted digests are
/// never decoded (see [`crate::compare`]).
pub fn from_base64(text: &str) -> Result<Vec<u8>, HashpadError> {
    STANDARD
        .decode(text)
        .map_err(|e| HashpadError::InvalidDigest(format!("base64 decode failed: {e}")))
}
