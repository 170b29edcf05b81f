//! # Hash Subcommand
//!
//! `hashpad hash --text abc`, `hashpad hash --file report.pdf`, or
//! `echo -n abc | hashpad hash`. Prints both renderings and records the
//! result in history.

use anyhow::Result;
use clap::Args;

use hashpad_core::KeyValueStore;

use super::{format_panel, hash_input, InputArgs};
use crate::config::AppContext;
use crate::session::{HashOutcome, HashSession};

/// Arguments for `hashpad hash`.
#[derive(Args, Debug, Clone, Default)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Do not record this hash in history.
    #[arg(long)]
    pub no_history: bool,
}

/// Execute the hash subcommand.
pub async fn run_hash(args: &HashArgs, ctx: &AppContext) -> Result<u8> {
    let session = ctx
        .open_session()
        .with_history_recording(ctx.record_history && !args.no_history);
    execute(&session, args, ctx.show_input).await
}

async fn execute<S: KeyValueStore>(
    session: &HashSession<S>,
    args: &HashArgs,
    show_input: bool,
) -> Result<u8> {
    let outcome = hash_input(session, &args.input).await?;

    if show_input && args.input.file.is_none() {
        println!("input:  {}", session.input());
    }
    println!("{}", format_panel(&session.panel()));

    Ok(match outcome {
        HashOutcome::Hashed(_) | HashOutcome::Empty => 0,
        HashOutcome::Failed(reason) => {
            eprintln!("hash failed: {reason}");
            1
        }
        HashOutcome::Busy => 1,
    })
}
