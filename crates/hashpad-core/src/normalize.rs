//! # Input Normalizer
//!
//! Classifies a digest pasted by the user as hex, base64, or neither.
//!
//! ## Rules
//!
//! 1. Surrounding whitespace is trimmed; an empty result is unrecognized.
//! 2. Exactly 64 hex digits, either case, is `Hex`, folded to lowercase.
//! 3. Otherwise 43 to 88 characters drawn from `A-Z a-z 0-9 + / =` is
//!    `Base64`, kept verbatim.
//! 4. Anything else is unrecognized.
//!
//! The base64 window is intentionally loose. A 32-byte digest is always 44
//! padded characters, but unpadded and oddly padded pastes are still let
//! through to the comparator, which then reports a plain mismatch.

const HEX_DIGEST_LEN: usize = 64;
const BASE64_MIN_LEN: usize = 43;
const BASE64_MAX_LEN: usize = 88;

/// Which textual form a pasted digest was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Hex,
    Base64,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pasted digest after classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedCandidate {
    /// 64 lowercase hex characters.
    Hex(String),
    /// Base64-alphabet text, exactly as pasted (minus surrounding whitespace).
    Base64(String),
}

impl NormalizedCandidate {
    pub fn kind(&self) -> CandidateKind {
        match self {
            Self::Hex(_) => CandidateKind::Hex,
            Self::Base64(_) => CandidateKind::Base64,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Hex(v) | Self::Base64(v) => v,
        }
    }
}

/// Classify raw user input. Returns `None` when the input is neither shape.
pub fn normalize(raw: &str) -> Option<NormalizedCandidate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.len() == HEX_DIGEST_LEN && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Some(NormalizedCandidate::Hex(trimmed.to_ascii_lowercase()));
    }

    if (BASE64_MIN_LEN..=BASE64_MAX_LEN).contains(&trimmed.len())
        && trimmed.bytes().all(is_base64_char)
    {
        return Some(NormalizedCandidate::Base64(trimmed.to_string()));
    }

    None
}

fn is_base64_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_blank_are_unrecognized() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("  "), None);
        assert_eq!(normalize("\n\t "), None);
    }

    #[test]
    fn uppercase_hex_is_folded() {
        let input = "A".repeat(64);
        assert_eq!(
            normalize(&input),
            Some(NormalizedCandidate::Hex("a".repeat(64)))
        );
    }

    #[test]
    fn hex_is_trimmed() {
        let hex = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        let padded = format!("  {hex}\n");
        assert_eq!(normalize(&padded), Some(NormalizedCandidate::Hex(hex.into())));
    }

    #[test]
    fn padded_base64_digest_is_kept_verbatim() {
        let b64 = "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=";
        let got = normalize(b64).unwrap();
        assert_eq!(got.kind(), CandidateKind::Base64);
        assert_eq!(got.value(), b64);
    }

    #[test]
    fn unpadded_base64_is_still_accepted() {
        let b64 = "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0";
        assert_eq!(b64.len(), 43);
        assert_eq!(normalize(b64).map(|c| c.kind()), Some(CandidateKind::Base64));
    }

    #[test]
    fn base64_length_window_bounds() {
        assert_eq!(normalize(&"A".repeat(42)), None);
        assert!(normalize(&"A".repeat(43)).is_some());
        assert!(normalize(&"A".repeat(88)).is_some());
        assert_eq!(normalize(&"A".repeat(89)), None);
    }

    #[test]
    fn sixty_four_char_non_hex_falls_through_to_base64() {
        let input = "z".repeat(64);
        assert_eq!(
            normalize(&input),
            Some(NormalizedCandidate::Base64(input.clone()))
        );
    }

    #[test]
    fn prose_is_unrecognized() {
        assert_eq!(normalize("not a digest"), None);
    }

    #[test]
    fn interior_whitespace_is_not_stripped() {
        let hex = "ba7816bf8f01cfea414140de5dae2223 b00361a396177a9cb410ff61f20015ad";
        assert_eq!(normalize(hex), None);
    }

    #[test]
    fn url_safe_alphabet_is_rejected() {
        let b64 = "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0=";
        assert_eq!(normalize(b64), None);
    }

    proptest! {
        #[test]
        fn hex_classification_is_idempotent(s in "[0-9a-fA-F]{64}") {
            let first = normalize(&s).unwrap();
            prop_assert_eq!(first.kind(), CandidateKind::Hex);
            let second = normalize(first.value()).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.value(), s.to_lowercase());
        }

        #[test]
        fn normalize_ignores_surrounding_whitespace(s in "[A-Za-z0-9+/=]{43,88}", pad in "[ \t\n]{0,4}") {
            let padded = format!("{pad}{s}{pad}");
            prop_assert_eq!(normalize(&padded), normalize(&s));
        }
    }
}
