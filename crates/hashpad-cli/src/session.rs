//! # Hash Session
//!
//! The presentation layer's state: the text input, the result panel, and the
//! history store, bound to one digest provider. Every user event (hash,
//! clear, compare, copy, history) is a method here, and every failure is
//! turned into an outcome value at this boundary.
//!
//! ## Single-Flight
//!
//! At most one hash writes to the panel at a time. A hash request takes the
//! in-flight guard before its only suspension point (the off-thread digest)
//! and a second request arriving meanwhile gets [`HashOutcome::Busy`]. The
//! guard is released on drop, so success, failure and panics all re-enable
//! hashing.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use hashpad_core::{
    check, CompareOutcome, DigestBytes, EncodedDigest, HashpadError, HistoryEntry, HistoryLog,
    HistoryStore, KeyValueStore, PanelField, ResultPanel,
};
use hashpad_crypto::{digest_off_thread, CryptoError, DigestProvider};

use crate::clipboard::Clipboard;

/// Result of a hash request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// No input; the panel was reset to placeholders.
    Empty,
    /// Another hash is in flight; nothing was changed.
    Busy,
    /// The panel now shows this digest.
    Hashed(EncodedDigest),
    /// The panel now shows "Error".
    Failed(String),
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The field holds a placeholder or error text.
    NothingToCopy,
    Copied,
    Failed(String),
}

impl CopyOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::NothingToCopy => "Nothing to copy.".to_string(),
            Self::Copied => "Copied to clipboard".to_string(),
            Self::Failed(e) => format!("Copy failed ({e}); maybe not an interactive terminal?"),
        }
    }
}

/// Releases the in-flight flag when dropped.
pub struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct HashSession<S> {
    provider: Arc<dyn DigestProvider>,
    input: Mutex<String>,
    panel: Mutex<ResultPanel>,
    history: Mutex<HistoryStore<S>>,
    in_flight: AtomicBool,
    record_history: bool,
}

impl<S: KeyValueStore> HashSession<S> {
    pub fn new(provider: Arc<dyn DigestProvider>, history: HistoryStore<S>) -> Self {
        Self {
            provider,
            input: Mutex::new(String::new()),
            panel: Mutex::new(ResultPanel::new()),
            history: Mutex::new(history),
            in_flight: AtomicBool::new(false),
            record_history: true,
        }
    }

    /// Whether successful hashes are appended to the history log.
    pub fn with_history_recording(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Take the in-flight guard, or `None` if a hash is already running.
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                flag: &self.in_flight,
            })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the output fields.
    pub fn panel(&self) -> ResultPanel {
        self.panel.lock().clone()
    }

    /// The text most recently submitted for hashing.
    pub fn input(&self) -> String {
        self.input.lock().clone()
    }

    /// Hash `text` and show the result.
    pub async fn hash_text(&self, text: &str) -> HashOutcome {
        self.hash_bytes(text.as_bytes().to_vec()).await
    }

    /// Hash raw text-input bytes, such as piped stdin. They need not be
    /// UTF-8; the input and history label use a lossy decoding.
    pub async fn hash_bytes(&self, data: Vec<u8>) -> HashOutcome {
        if data.is_empty() {
            self.input.lock().clear();
            self.panel.lock().reset();
            return HashOutcome::Empty;
        }
        let Some(_guard) = self.try_begin() else {
            tracing::debug!("hash ignored: another hash is in flight");
            return HashOutcome::Busy;
        };
        let label = String::from_utf8_lossy(&data).into_owned();
        *self.input.lock() = label.clone();

        let result = digest_off_thread(self.provider.clone(), data).await;
        self.finish(result, |digest, ts| HistoryEntry::text(&label, digest, ts))
    }

    /// Read and hash the file at `path`, labelling history with its name.
    pub async fn hash_file(&self, path: &Path) -> HashOutcome {
        let Some(_guard) = self.try_begin() else {
            tracing::debug!("hash ignored: another hash is in flight");
            return HashOutcome::Busy;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "file read failed");
                self.panel.lock().fail();
                return HashOutcome::Failed(format!("failed to read {}: {e}", path.display()));
            }
        };
        tracing::info!(file = %name, bytes = data.len(), "hashing file");

        let result = digest_off_thread(self.provider.clone(), data).await;
        self.finish(result, |digest, ts| HistoryEntry::file(&name, digest, ts))
    }

    fn finish(
        &self,
        result: Result<DigestBytes, CryptoError>,
        make_entry: impl FnOnce(&EncodedDigest, i64) -> HistoryEntry,
    ) -> HashOutcome {
        match result {
            Ok(bytes) => {
                let digest = bytes.encode();
                self.panel.lock().show(&digest);
                if self.record_history {
                    let entry = make_entry(&digest, chrono::Utc::now().timestamp_millis());
                    if let Err(e) = self.history.lock().append(entry) {
                        tracing::warn!(error = %e, "history not saved");
                    }
                }
                HashOutcome::Hashed(digest)
            }
            Err(e) => {
                tracing::error!(provider = self.provider.provider_name(), error = %e, "digest failed");
                self.panel.lock().fail();
                HashOutcome::Failed(e.to_string())
            }
        }
    }

    /// Empty the text input and reset both output fields.
    pub fn clear(&self) {
        self.input.lock().clear();
        self.panel.lock().reset();
    }

    /// Put the newest history entry on the panel, as if it had just been
    /// computed. Returns `None` when the history is empty.
    pub fn show_latest(&self) -> Option<EncodedDigest> {
        let log = self.history.lock().load();
        let digest = log.newest()?.digest().clone();
        self.panel.lock().show(&digest);
        Some(digest)
    }

    /// Compare a pasted digest with the one on display.
    pub fn compare(&self, raw: &str) -> CompareOutcome {
        let panel = self.panel.lock();
        check(raw, panel.current())
    }

    /// Copy one output field to the clipboard.
    pub fn copy(&self, field: PanelField, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        let text = self.panel.lock().field(field).value().map(str::to_string);
        let Some(text) = text else {
            return CopyOutcome::NothingToCopy;
        };
        match clipboard.write_text(&text) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                tracing::warn!(field = field.as_str(), error = %e, "clipboard write failed");
                CopyOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn history(&self) -> HistoryLog {
        self.history.lock().load()
    }

    pub fn clear_history(&self) -> Result<(), HashpadError> {
        self.history.lock().clear()
    }
}
