//! # Result Panel
//!
//! The two read-only output fields (hex and base64) as a value that is passed
//! from the computation layer to whatever draws it. The panel is the only
//! source of "the digest currently on display" for comparison and copying.

use crate::digest::EncodedDigest;

/// Text shown in a field that holds nothing.
pub const PLACEHOLDER: &str = "—";

/// Text shown in a field after a failed computation.
pub const ERROR_TEXT: &str = "Error";

/// Selects one of the two output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelField {
    Hex,
    Base64,
}

impl PanelField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

impl std::str::FromStr for PanelField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" | "b64" => Ok(Self::Base64),
            other => Err(format!("unknown field {other:?}: expected hex or base64")),
        }
    }
}

/// Contents of one output field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Placeholder,
    Error,
    Value(String),
}

impl FieldValue {
    /// Text as displayed.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Error => ERROR_TEXT,
            Self::Value(v) => v,
        }
    }

    /// The digest text, if the field holds one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// The pair of output fields plus the digest they were filled from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanel {
    current: Option<EncodedDigest>,
    hex: FieldValue,
    base64: FieldValue,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `digest` in both fields.
    pub fn show(&mut self, digest: &EncodedDigest) {
        self.hex = FieldValue::Value(digest.hex().to_string());
        self.base64 = FieldValue::Value(digest.base64().to_string());
        self.current = Some(digest.clone());
    }

    /// Return both fields to the placeholder.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark both fields as failed.
    pub fn fail(&mut self) {
        self.current = None;
        self.hex = FieldValue::Error;
        self.base64 = FieldValue::Error;
    }

    pub fn field(&self, field: PanelField) -> &FieldValue {
        match field {
            PanelField::Hex => &self.hex,
            PanelField::Base64 => &self.base64,
        }
    }

    /// The digest on display, if any.
    pub fn current(&self) -> Option<&EncodedDigest> {
        self.current.as_ref()
    }
}
