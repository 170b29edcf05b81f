//! # History Store
//!
//! A bounded, newest-first log of past hash operations persisted as a JSON
//! array under a single storage key.
//!
//! ## Persistent Layout
//!
//! ```json
//! [{"type":"text","input":"abc","hex":"ba78…15ad","b64":"ungW…Fa0=","ts":1760000000000}]
//! ```
//!
//! - `type`: `"text"` or `"file"`.
//! - `input`: the first 120 characters of the text, or the file name.
//! - `hex` / `b64`: the two renderings of the same digest.
//! - `ts`: milliseconds since the Unix epoch.
//!
//! ## Invariants
//!
//! - The log never holds more than [`MAX_HISTORY_ENTRIES`] entries. Overflow
//!   evicts the oldest entry by insertion order.
//! - `hex` and `b64` of every entry decode to the same bytes; a stored entry
//!   that violates this is dropped on load.
//!
//! A stored value that is not a JSON array loads as an empty log. The
//! failure is logged at `warn` and otherwise swallowed, and the next append
//! overwrites the corrupt value. Individually invalid entries are skipped
//! with a `warn` each, keeping the valid ones.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::digest::{DigestBase64, DigestHex, EncodedDigest};
use crate::error::HashpadError;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized history log.
pub const HISTORY_KEY: &str = "hashpad_history_v1";

/// Maximum number of entries retained.
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Text inputs are stored truncated to this many characters.
pub const MAX_TEXT_LABEL_CHARS: usize = 120;

/// Number of hex characters shown in a one-line summary.
const SUMMARY_HEX_CHARS: usize = 16;

/// What was hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed hash operation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry", into = "StoredEntry")]
pub struct HistoryEntry {
    kind: EntryKind,
    input: String,
    digest: EncodedDigest,
    ts: i64,
}

/// Wire shape of an entry. The hex/base64 pairing is checked on the way in.
#[derive(Serialize, Deserialize)]
struct StoredEntry {
    #[serde(rename = "type")]
    kind: EntryKind,
    #[serde(default)]
    input: String,
    hex: DigestHex,
    b64: DigestBase64,
    ts: i64,
}

impl TryFrom<StoredEntry> for HistoryEntry {
    type Error = HashpadError;

    fn try_from(raw: StoredEntry) -> Result<Self, Self::Error> {
        let digest = EncodedDigest::from_parts(raw.hex, raw.b64)?;
        Ok(Self::new(raw.kind, raw.input, digest, raw.ts))
    }
}

impl From<HistoryEntry> for StoredEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            kind: entry.kind,
            input: entry.input,
            hex: entry.digest.hex().clone(),
            b64: entry.digest.base64().clone(),
            ts: entry.ts,
        }
    }
}

impl HistoryEntry {
    fn new(kind: EntryKind, input: String, digest: EncodedDigest, ts: i64) -> Self {
        Self {
            kind,
            input,
            digest,
            ts,
        }
    }

    /// Entry for hashed text. The label keeps the first 120 characters.
    pub fn text(text: &str, digest: &EncodedDigest, ts_millis: i64) -> Self {
        let label: String = text.chars().take(MAX_TEXT_LABEL_CHARS).collect();
        Self::new(EntryKind::Text, label, digest.clone(), ts_millis)
    }

    /// Entry for a hashed file, labelled with its file name.
    pub fn file(file_name: &str, digest: &EncodedDigest, ts_millis: i64) -> Self {
        Self::new(EntryKind::File, file_name.to_string(), digest.clone(), ts_millis)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hex(&self) -> &DigestHex {
        self.digest.hex()
    }

    pub fn base64(&self) -> &DigestBase64 {
        self.digest.base64()
    }

    pub fn digest(&self) -> &EncodedDigest {
        &self.digest
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.ts
    }
}

// ---------------------------------------------------------------------------
// HistoryLog
// ---------------------------------------------------------------------------

/// Newest-first sequence of at most [`MAX_HISTORY_ENTRIES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog(Vec<HistoryEntry>);

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted log, dropping anything past the cap.
    ///
    /// Only a value that is not a JSON array is an error. Entries that fail
    /// validation are skipped one by one so the rest of the log survives.
    pub fn from_json(json: &str) -> Result<Self, HashpadError> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<HistoryEntry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping invalid history entry");
                    None
                }
            })
            .take(MAX_HISTORY_ENTRIES)
            .collect();
        Ok(Self(entries))
    }

    pub fn to_json(&self) -> Result<String, HashpadError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Insert at the front, evicting the oldest entry on overflow.
    pub fn push_front(&mut self, entry: HistoryEntry) {
        self.0.insert(0, entry);
        self.0.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.0.iter()
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// HistoryStore
// ---------------------------------------------------------------------------

/// The history log bound to a storage backend.
///
/// Every mutation is persisted before returning. The store keeps no cached
/// copy, so two stores over the same backend always agree.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Bind to `storage` under [`HISTORY_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, HISTORY_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted log.
    ///
    /// Absent, unreadable and unparseable values all load as an empty log.
    pub fn load(&self) -> HistoryLog {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HistoryLog::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "history unreadable; treating as empty");
                return HistoryLog::new();
            }
        };
        match HistoryLog::from_json(&raw) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "history unparseable; treating as empty");
                HistoryLog::new()
            }
        }
    }

    /// Prepend `entry`, cap the log, and persist it. Returns the new log.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<HistoryLog, HashpadError> {
        let mut log = self.load();
        log.push_front(entry);
        self.storage.set(&self.key, &log.to_json()?)?;
        tracing::debug!(entries = log.len(), "history appended");
        Ok(log)
    }

    /// Delete the storage key outright.
    pub fn clear(&mut self) -> Result<(), HashpadError> {
        self.storage.remove(&self.key)?;
        tracing::debug!(key = %self.key, "history cleared");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Display form of one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// `"{time} — {type} — {first 16 hex}..."`
    pub summary: String,
    /// Full hex, full base64, and input label on separate lines.
    pub detail: String,
}

/// Render rows with timestamps in the local timezone.
pub fn render(log: &HistoryLog) -> Vec<HistoryRow> {
    render_in(log, &Local)
}

/// Render rows with timestamps in `tz`.
pub fn render_in<Tz>(log: &HistoryLog, tz: &Tz) -> Vec<HistoryRow>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    log.iter()
        .map(|entry| {
            let when = match tz.timestamp_millis_opt(entry.ts).single() {
                Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
                None => entry.ts.to_string(),
            };
            HistoryRow {
                summary: format!(
                    "{when} — {} — {}...",
                    entry.kind,
                    entry.hex().prefix(SUMMARY_HEX_CHARS)
                ),
                detail: format!(
                    "Hex: {}\nBase64: {}\nInput: {}",
                    entry.hex(),
                    entry.base64(),
                    entry.input
                ),
            }
        })
        .collect()
}
