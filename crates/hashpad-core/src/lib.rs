//! # hashpad-core — Foundational Types for hashpad
//!
//! The leaf crate of the workspace. It holds everything about a digest that
//! is not the hashing itself: the textual encodings, the parsing of digests
//! pasted by a user, the comparison against the digest currently on display,
//! and the bounded history of past computations.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for digest forms.** `DigestBytes`, `DigestHex` and
//!    `DigestBase64` are distinct types. A `DigestHex` is always 64 lowercase
//!    hex characters; there is no way to hold an unvalidated one.
//!
//! 2. **One encoding step.** `EncodedDigest` is produced from `DigestBytes` in
//!    a single call, so the hex and base64 forms it carries always describe
//!    the same 32 bytes.
//!
//! 3. **Injected storage.** The history log never touches a global. It is
//!    owned by a `HistoryStore` over any `KeyValueStore` backend.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hashpad-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod compare;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod history;
pub mod normalize;
pub mod panel;
pub mod storage;

// Re-export primary types for ergonomic imports.
pub use compare::{check, compare, CompareOutcome};
pub use digest::{DigestBase64, DigestBytes, DigestHex, EncodedDigest, DIGEST_LEN};
pub use error::{HashpadError, StorageError};
pub use history::{
    EntryKind, HistoryEntry, HistoryLog, HistoryRow, HistoryStore, HISTORY_KEY,
    MAX_HISTORY_ENTRIES, MAX_TEXT_LABEL_CHARS,
};
pub use normalize::{normalize, CandidateKind, NormalizedCandidate};
pub use panel::{FieldValue, PanelField, ResultPanel};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
