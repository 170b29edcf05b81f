//! # History Subcommand
//!
//! `hashpad history [--details | --json]` lists past hashes newest first;
//! `hashpad history clear` deletes the history file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use hashpad_core::history::render;
use hashpad_core::{HistoryLog, KeyValueStore};

use crate::config::AppContext;
use crate::session::HashSession;

/// Arguments for `hashpad history`.
#[derive(Args, Debug, Clone, Default)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommand>,

    /// Print full hex, base64 and input under each row.
    #[arg(long, conflicts_with = "json")]
    pub details: bool,

    /// Print the stored JSON array.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// Delete all history.
    Clear,
}

/// Execute the history subcommand.
pub fn run_history(args: &HistoryArgs, ctx: &AppContext) -> Result<u8> {
    let session = ctx.open_session();
    match args.command {
        Some(HistoryCommand::Clear) => {
            clear(&session)?;
            println!("History cleared.");
        }
        None => println!("{}", list(&session, args)?),
    }
    Ok(0)
}

fn clear<S: KeyValueStore>(session: &HashSession<S>) -> Result<()> {
    session
        .clear_history()
        .context("failed to clear history")
}

fn list<S: KeyValueStore>(session: &HashSession<S>, args: &HistoryArgs) -> Result<String> {
    let log = session.history();
    if args.json {
        return log.to_json().context("failed to serialize history");
    }
    Ok(format_log(&log, args.details))
}

/// One line per entry, optionally followed by the indented detail block.
pub(crate) fn format_log(log: &HistoryLog, details: bool) -> String {
    if log.is_empty() {
        return "No history.".to_string();
    }
    let mut lines = Vec::new();
    for row in render(log) {
        lines.push(row.summary);
        if details {
            lines.extend(row.detail.lines().map(|l| format!("    {l}")));
        }
    }
    lines.join("\n")
}
