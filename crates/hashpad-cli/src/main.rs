//! # hashpad CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hashpad_cli::clipboard::Osc52Clipboard;
use hashpad_cli::commands::compare::{run_compare, CompareArgs};
use hashpad_cli::commands::copy::{run_copy, CopyArgs};
use hashpad_cli::commands::hash::{run_hash, HashArgs};
use hashpad_cli::commands::history::{run_history, HistoryArgs};
use hashpad_cli::config::{AppContext, Config};
use hashpad_cli::shell;

/// hashpad: SHA-256 of text or files, in hex and base64.
///
/// Compare a pasted digest against the result, copy either rendering to the
/// clipboard, and browse the last 20 hashes.
#[derive(Parser, Debug)]
#[command(name = "hashpad", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the history file.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash text, a file, or stdin.
    Hash(HashArgs),

    /// Compare a hex or base64 digest with a computed one.
    Compare(CompareArgs),

    /// List or clear past hashes.
    History(HistoryArgs),

    /// Copy the newest digest to the clipboard.
    Copy(CopyArgs),

    /// Interactive session.
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout carries results and clipboard escapes.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hashpad v{} starting", env!("CARGO_PKG_VERSION"));

    match dispatch(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn dispatch(cli: Cli) -> Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let ctx = AppContext::resolve(&config, cli.data_dir)?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Hash(args) => run_hash(&args, &ctx).await,
        Commands::Compare(args) => run_compare(&args, &ctx).await,
        Commands::History(args) => run_history(&args, &ctx),
        Commands::Copy(args) => run_copy(&args, &ctx),
        Commands::Shell => {
            let session = ctx.open_session();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            let mut clipboard = Osc52Clipboard::stdout();
            shell::run(&session, stdin, &mut stdout, &mut clipboard, ctx.show_input).await?;
            Ok(0)
        }
    }
}
