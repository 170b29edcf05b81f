//! # Copy Subcommand
//!
//! `hashpad copy hex|base64` puts one rendering of the newest history entry
//! on the system clipboard via OSC 52.

use anyhow::Result;
use clap::Args;

use hashpad_core::{KeyValueStore, PanelField};

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::config::AppContext;
use crate::session::{CopyOutcome, HashSession};

/// Arguments for `hashpad copy`.
#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// Which rendering to copy: `hex` or `base64`.
    #[arg(value_name = "FIELD")]
    pub field: PanelField,
}

/// Execute the copy subcommand.
pub fn run_copy(args: &CopyArgs, ctx: &AppContext) -> Result<u8> {
    let session = ctx.open_session();
    let outcome = execute(&session, args.field, &mut Osc52Clipboard::stdout());
    // The escape sequence went to stdout; keep the status off it.
    eprintln!("{}", outcome.message());
    Ok(match outcome {
        CopyOutcome::Copied => 0,
        CopyOutcome::NothingToCopy | CopyOutcome::Failed(_) => 1,
    })
}

fn execute<S: KeyValueStore>(
    session: &HashSession<S>,
    field: PanelField,
    clipboard: &mut dyn Clipboard,
) -> CopyOutcome {
    session.show_latest();
    session.copy(field, clipboard)
}
