//! # hashpad-cli — SHA-256 Digest Tool
//!
//! Hashes text or a file with SHA-256 and shows the digest as lowercase hex
//! and standard base64. A pasted digest can be checked against the result,
//! and every successful hash is kept in a local history of the last 20.
//!
//! ## Subcommands
//!
//! - `hash` — hash `--text`, `--file`, or stdin
//! - `compare` — check a pasted digest against a fresh hash or the newest history entry
//! - `history` — list or clear past hashes
//! - `copy` — put the newest digest on the clipboard (OSC 52)
//! - `shell` — interactive loop over one long-lived session
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `commands`; state transitions live in `session`.
//! - Digest encoding, parsing and history rules belong to `hashpad-core`.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod session;
pub mod shell;
