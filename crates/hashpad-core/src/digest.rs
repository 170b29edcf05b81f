//! # Digest Newtypes
//!
//! `DigestBytes` is the raw 32-byte output of the digest provider. The two
//! textual forms, `DigestHex` and `DigestBase64`, are derived from it and
//! are never produced from anything else except validated parsing of
//! persisted history.
//!
//! ## Invariant
//!
//! An [`EncodedDigest`] carries a hex form and a base64 form that encode the
//! same bytes. [`DigestBytes::encode()`] produces both in one step;
//! [`EncodedDigest::from_parts()`] re-checks the pairing for data read back
//! from storage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{from_base64, to_base64, to_hex};
use crate::error::HashpadError;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a digest rendered as hex.
const HEX_LEN: usize = DIGEST_LEN * 2;

/// Length of a digest rendered as padded base64.
const BASE64_LEN: usize = 44;

/// Raw digest output. Immutable once produced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestBytes([u8; DIGEST_LEN]);

impl DigestBytes {
    /// Wrap 32 raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Wrap a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HashpadError> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            HashpadError::InvalidDigest(format!(
                "expected {DIGEST_LEN} digest bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Access the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> DigestHex {
        DigestHex(to_hex(&self.0))
    }

    /// Standard padded base64 rendering.
    pub fn to_base64(&self) -> DigestBase64 {
        DigestBase64(to_base64(&self.0))
    }

    /// Produce both renderings at once.
    pub fn encode(&self) -> EncodedDigest {
        EncodedDigest {
            hex: self.to_hex(),
            base64: self.to_base64(),
        }
    }
}

impl std::fmt::Debug for DigestBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigestBytes({})", to_hex(&self.0))
    }
}

// ---------------------------------------------------------------------------
// DigestHex
// ---------------------------------------------------------------------------

/// A digest as exactly 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestHex(String);

impl DigestHex {
    /// Parse a canonical (lowercase) 64-character hex digest.
    ///
    /// Uppercase input is rejected rather than folded: this is the stored
    /// form, and user input goes through [`crate::normalize`] instead.
    pub fn parse(s: &str) -> Result<Self, HashpadError> {
        if s.len() != HEX_LEN {
            return Err(HashpadError::InvalidDigest(format!(
                "hex digest must be {HEX_LEN} chars, got {}",
                s.len()
            )));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(HashpadError::InvalidDigest(format!(
                "hex digest must be lowercase [0-9a-f], got {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first `n` characters, or the whole string if shorter.
    pub fn prefix(&self, n: usize) -> &str {
        &self.0[..n.min(self.0.len())]
    }

    /// Decode back to raw bytes.
    pub fn to_bytes(&self) -> Result<DigestBytes, HashpadError> {
        let raw = hex::decode(&self.0)
            .map_err(|e| HashpadError::InvalidDigest(format!("hex decode failed: {e}")))?;
        DigestBytes::from_slice(&raw)
    }
}

impl std::fmt::Display for DigestHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DigestHex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DigestHex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// DigestBase64
// ---------------------------------------------------------------------------

/// A digest as 44 characters of standard padded base64.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestBase64(String);

impl DigestBase64 {
    /// Parse a padded base64 digest that decodes to exactly 32 bytes.
    pub fn parse(s: &str) -> Result<Self, HashpadError> {
        if s.len() != BASE64_LEN {
            return Err(HashpadError::InvalidDigest(format!(
                "base64 digest must be {BASE64_LEN} chars, got {}",
                s.len()
            )));
        }
        let raw = from_base64(s)?;
        DigestBytes::from_slice(&raw)?;
        Ok(Self(s.to_string()))
    }

    /// Borrow the base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to raw bytes.
    pub fn to_bytes(&self) -> Result<DigestBytes, HashpadError> {
        DigestBytes::from_slice(&from_base64(&self.0)?)
    }
}

impl std::fmt::Display for DigestBase64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DigestBase64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DigestBase64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// EncodedDigest
// ---------------------------------------------------------------------------

/// The hex and base64 renderings of one digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedDigest {
    hex: DigestHex,
    base64: DigestBase64,
}

impl EncodedDigest {
    /// Pair an independently parsed hex and base64 form.
    ///
    /// # Errors
    ///
    /// Returns `HashpadError::Integrity` if the two forms decode to
    /// different bytes.
    pub fn from_parts(hex: DigestHex, base64: DigestBase64) -> Result<Self, HashpadError> {
        if hex.to_bytes()? != base64.to_bytes()? {
            return Err(HashpadError::Integrity(format!(
                "hex {} and base64 {} encode different digests",
                hex.prefix(16),
                base64
            )));
        }
        Ok(Self { hex, base64 })
    }

    /// The hex form.
    pub fn hex(&self) -> &DigestHex {
        &self.hex
    }

    /// The base64 form.
    pub fn base64(&self) -> &DigestBase64 {
        &self.base64
    }
}
