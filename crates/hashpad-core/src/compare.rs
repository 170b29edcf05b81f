//! # Comparator
//!
//! Matches a normalized candidate against the digest currently on display.
//!
//! Comparison is textual. A hex candidate is compared with the displayed hex,
//! a base64 candidate with the displayed base64, both by exact string
//! equality. Base64 is never decoded, so a candidate that encodes the same
//! bytes with different padding is reported as a mismatch.

use crate::digest::{DigestBase64, DigestHex, EncodedDigest};
use crate::normalize::{normalize, NormalizedCandidate};

/// Compare a candidate against the current hex and base64 renderings.
pub fn compare(
    candidate: &NormalizedCandidate,
    current_hex: &DigestHex,
    current_base64: &DigestBase64,
) -> bool {
    match candidate {
        NormalizedCandidate::Hex(v) => v == current_hex.as_str(),
        NormalizedCandidate::Base64(v) => v == current_base64.as_str(),
    }
}

/// The user-visible result of a compare request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// Nothing was pasted.
    Empty,
    /// The paste is neither a hex nor a base64 digest.
    Unrecognized,
    Match(NormalizedCandidate),
    NoMatch(NormalizedCandidate),
}

impl CompareOutcome {
    /// Message shown in the compare result area.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Paste a digest to compare.",
            Self::Unrecognized => {
                "Unrecognized digest format. Paste exact hex (64 hex chars) or base64."
            }
            Self::Match(_) => "Match ✅",
            Self::NoMatch(_) => "No match ❌",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Normalize `raw` and compare it against `current`.
///
/// With nothing on display, a well-formed candidate is a mismatch rather
/// than an error: the placeholder text can never equal a digest.
pub fn check(raw: &str, current: Option<&EncodedDigest>) -> CompareOutcome {
    if raw.is_empty() {
        return CompareOutcome::Empty;
    }
    let Some(candidate) = normalize(raw) else {
        return CompareOutcome::Unrecognized;
    };
    let matched = current.is_some_and(|c| compare(&candidate, c.hex(), c.base64()));
    if matched {
        CompareOutcome::Match(candidate)
    } else {
        CompareOutcome::NoMatch(candidate)
    }
}
