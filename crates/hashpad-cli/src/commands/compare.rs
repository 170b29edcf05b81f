//! # Compare Subcommand
//!
//! `hashpad compare <DIGEST> [--text T | --file F]`
//!
//! With an input, the digest is computed first and the paste is compared
//! against it; the computation is not added to history. Without one, the
//! newest history entry is treated as the digest on display.
//!
//! Exit codes: 0 match, 1 no match, 2 empty or unrecognized paste.

use anyhow::Result;
use clap::Args;

use hashpad_core::{CompareOutcome, KeyValueStore};

use super::{hash_input, InputArgs};
use crate::config::AppContext;
use crate::session::{HashOutcome, HashSession};

/// Arguments for `hashpad compare`.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Digest to check, as 64 hex characters or base64.
    #[arg(value_name = "DIGEST")]
    pub digest: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the compare subcommand.
pub async fn run_compare(args: &CompareArgs, ctx: &AppContext) -> Result<u8> {
    let session = ctx.open_session().with_history_recording(false);
    execute(&session, args).await
}

async fn execute<S: KeyValueStore>(session: &HashSession<S>, args: &CompareArgs) -> Result<u8> {
    if args.input.is_empty() {
        if session.show_latest().is_none() {
            tracing::info!("history is empty; nothing on display to compare against");
        }
    } else if let HashOutcome::Failed(reason) = hash_input(session, &args.input).await? {
        eprintln!("hash failed: {reason}");
    }

    let outcome = session.compare(&args.digest);
    println!("{}", outcome.message());
    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &CompareOutcome) -> u8 {
    match outcome {
        CompareOutcome::Match(_) => 0,
        CompareOutcome::NoMatch(_) => 1,
        CompareOutcome::Empty | CompareOutcome::Unrecognized => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::hash::{run_hash, HashArgs};

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const ABC_B64: &str = "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=";

    fn ctx(dir: &std::path::Path) -> AppContext {
        AppContext {
            data_dir: dir.to_path_buf(),
            show_input: false,
            record_history: true,
        }
    }

    fn with_text(digest: &str, text: &str) -> CompareArgs {
        CompareArgs {
            digest: digest.to_string(),
            input: InputArgs {
                text: Some(text.to_string()),
                file: None,
            },
        }
    }

    #[tokio::test]
    async fn match_against_text_input() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(dir.path());
        assert_eq!(run_compare(&with_text(ABC_HEX, "abc"), &ctx).await.unwrap(), 0);
        assert_eq!(run_compare(&with_text(ABC_B64, "abc"), &ctx).await.unwrap(), 0);
        assert_eq!(run_compare(&with_text(ABC_HEX, "abd"), &ctx).await.unwrap(), 1);
        // Comparisons never record history.
        assert!(ctx.open_session().history().is_empty());
    }

    #[tokio::test]
    async fn unrecognized_paste_exits_2() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(dir.path());
        assert_eq!(
            run_compare(&with_text("not a digest", "abc"), &ctx).await.unwrap(),
            2
        );
        assert_eq!(run_compare(&with_text("", "abc"), &ctx).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn falls_back_to_newest_history_entry() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(dir.path());
        let bare = CompareArgs {
            digest: ABC_HEX.to_string(),
            input: InputArgs::default(),
        };
        // Empty history: nothing displayed, so no match.
        assert_eq!(run_compare(&bare, &ctx).await.unwrap(), 1);

        let hash = HashArgs {
            input: InputArgs {
                text: Some("abc".into()),
                file: None,
            },
            no_history: false,
        };
        run_hash(&hash, &ctx).await.unwrap();
        assert_eq!(run_compare(&bare, &ctx).await.unwrap(), 0);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&CompareOutcome::Empty), 2);
        assert_eq!(exit_code(&CompareOutcome::Unrecognized), 2);
    }
}
