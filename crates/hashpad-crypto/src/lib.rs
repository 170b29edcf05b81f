//! # hashpad-crypto — Digest Provider
//!
//! hashpad never implements a hash function. This crate wraps the `sha2`
//! crate behind the [`DigestProvider`] trait so the rest of the workspace
//! depends on the seam, not on a particular backend:
//!
//! - **SHA-256** via [`Sha256Provider`].
//! - **Off-thread computation** via [`digest_off_thread`], which moves the
//!   fully buffered input onto tokio's blocking pool so the event loop stays
//!   responsive while a large file is hashed.
//!
//! ## Crate Policy
//!
//! - Depends only on `hashpad-core` internally.
//! - No mocking of SHA-256 in tests; reference vectors run against `sha2`.

pub mod error;
pub mod provider;
pub mod sha256;

pub use error::CryptoError;
pub use provider::{digest_off_thread, digest_text, DigestProvider};
pub use sha256::{sha256_digest, Sha256Provider};
