//! # One-Shot Subcommands
//!
//! Each subcommand opens a fresh session over the on-disk history, performs
//! one user action, prints the result, and returns a process exit code.

pub mod compare;
pub mod copy;
pub mod hash;
pub mod history;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncRead, AsyncReadExt};

use hashpad_core::{KeyValueStore, PanelField, ResultPanel};

use crate::session::{HashOutcome, HashSession};

/// Where the bytes to hash come from. Stdin is used when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Hash this text.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Hash the contents of this file.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.file.is_none()
    }
}

/// Hash the selected input through `session`, reading stdin if needed.
pub(crate) async fn hash_input<S: KeyValueStore>(
    session: &HashSession<S>,
    input: &InputArgs,
) -> Result<HashOutcome> {
    hash_input_from(session, input, tokio::io::stdin()).await
}

/// As [`hash_input`], with `stdin` standing in for the process's stdin.
/// Piped bytes are hashed as-is, UTF-8 or not.
pub(crate) async fn hash_input_from<S, R>(
    session: &HashSession<S>,
    input: &InputArgs,
    mut stdin: R,
) -> Result<HashOutcome>
where
    S: KeyValueStore,
    R: AsyncRead + Unpin,
{
    if let Some(path) = &input.file {
        return Ok(session.hash_file(path).await);
    }
    if let Some(text) = &input.text {
        return Ok(session.hash_text(text).await);
    }
    let mut buf = Vec::new();
    stdin
        .read_to_end(&mut buf)
        .await
        .context("failed to read stdin")?;
    Ok(session.hash_bytes(buf).await)
}

/// The two output fields as printed by the CLI.
pub(crate) fn format_panel(panel: &ResultPanel) -> String {
    format!(
        "hex:    {}\nbase64: {}",
        panel.field(PanelField::Hex).display_text(),
        panel.field(PanelField::Base64).display_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashpad_core::{DigestBytes, HistoryStore, MemoryStore};
    use hashpad_crypto::Sha256Provider;
    use std::sync::Arc;

    fn session() -> HashSession<MemoryStore> {
        HashSession::new(
            Arc::new(Sha256Provider::new()),
            HistoryStore::new(MemoryStore::new()),
        )
    }

    #[tokio::test]
    async fn binary_stdin_is_hashed() {
        let s = session();
        let stdin: &[u8] = &[0xff, 0xfe];
        let outcome = hash_input_from(&s, &InputArgs::default(), stdin)
            .await
            .unwrap();
        let HashOutcome::Hashed(digest) = outcome.clone() else {
            panic!("expected Hashed, got {outcome:?}");
        };
        assert_eq!(
            digest.base64().as_str(),
            "s9UQ7wQnXKjmmOWzy7Ds45Se+SUvDNyDnp7jR0CaIgk="
        );
    }

    #[tokio::test]
    async fn text_flag_ignores_stdin() {
        let s = session();
        let stdin: &[u8] = b"from stdin";
        let args = InputArgs {
            text: Some("abc".into()),
            file: None,
        };
        let outcome = hash_input_from(&s, &args, stdin).await.unwrap();
        assert!(matches!(outcome, HashOutcome::Hashed(ref d)
            if d.hex().as_str() == "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
    }

    #[tokio::test]
    async fn empty_stdin_resets() {
        let s = session();
        let stdin: &[u8] = b"";
        let outcome = hash_input_from(&s, &InputArgs::default(), stdin)
            .await
            .unwrap();
        assert_eq!(outcome, HashOutcome::Empty);
    }

    #[test]
    fn format_panel_placeholders() {
        assert_eq!(format_panel(&ResultPanel::new()), "hex:    —\nbase64: —");
    }

    #[test]
    fn format_panel_values() {
        let d = DigestBytes::new([0; 32]).encode();
        let mut panel = ResultPanel::new();
        panel.show(&d);
        let out = format_panel(&panel);
        assert!(out.contains(&"0".repeat(64)));
        assert!(out.ends_with("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="));
    }
}
