//! # Interactive Shell
//!
//! `hashpad shell` keeps one session alive across many actions, so the
//! digest on display persists between a hash and a later compare or copy.
//! Lines are read from any async reader and results written to any writer;
//! the binary wires these to stdin/stdout.
//!
//! ```text
//! hashpad> hash abc
//! hex:    ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
//! base64: ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=
//! hashpad> compare BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD
//! Match ✅
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use hashpad_core::{KeyValueStore, PanelField};

use crate::clipboard::Clipboard;
use crate::commands::format_panel;
use crate::commands::history::format_log;
use crate::session::{HashOutcome, HashSession};

const PROMPT: &str = "hashpad> ";

const HELP: &str = "\
commands:
  hash <text>            hash the rest of the line (empty resets the output)
  file <path>            hash a file's contents
  compare <digest>       compare a hex or base64 digest with the output
  copy hex|base64        copy one output field to the clipboard
  clear                  clear the input and output
  history [details]      list past hashes, newest first
  history clear          delete all history
  show-input on|off      echo hashed text with results
  help                   show this message
  quit                   leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Hash(String),
    File(PathBuf),
    Compare(String),
    Copy(PanelField),
    Clear,
    History { details: bool },
    ClearHistory,
    ShowInput(bool),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let trimmed = line.trim_start();
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let cmd = match verb {
        // The text is taken verbatim, including inner and trailing spaces.
        "hash" => ShellCommand::Hash(rest.to_string()),
        "file" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err("usage: file <path>".to_string());
            }
            ShellCommand::File(PathBuf::from(path))
        }
        "compare" => ShellCommand::Compare(rest.to_string()),
        "copy" => ShellCommand::Copy(rest.parse()?),
        "clear" => ShellCommand::Clear,
        "history" => match rest.trim() {
            "" => ShellCommand::History { details: false },
            "details" => ShellCommand::History { details: true },
            "clear" => ShellCommand::ClearHistory,
            other => return Err(format!("unknown history option {other:?}")),
        },
        "show-input" => match rest.trim() {
            "on" => ShellCommand::ShowInput(true),
            "off" => ShellCommand::ShowInput(false),
            _ => return Err("usage: show-input on|off".to_string()),
        },
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command {other:?}; try help")),
    };
    Ok(Some(cmd))
}

/// Read commands from `input` until EOF or `quit`.
pub async fn run<S, R, W>(
    session: &HashSession<S>,
    input: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
    mut show_input: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };
        tracing::debug!(?cmd, "shell command");

        match cmd {
            ShellCommand::Hash(text) => {
                let outcome = session.hash_text(&text).await;
                report(session, out, &outcome, show_input)?;
            }
            ShellCommand::File(path) => {
                let outcome = session.hash_file(&path).await;
                report(session, out, &outcome, false)?;
            }
            ShellCommand::Compare(raw) => writeln!(out, "{}", session.compare(&raw).message())?,
            ShellCommand::Copy(field) => {
                let outcome = session.copy(field, clipboard);
                writeln!(out, "{}", outcome.message())?;
            }
            ShellCommand::Clear => {
                session.clear();
                writeln!(out, "{}", format_panel(&session.panel()))?;
            }
            ShellCommand::History { details } => {
                writeln!(out, "{}", format_log(&session.history(), details))?
            }
            ShellCommand::ClearHistory => match session.clear_history() {
                Ok(()) => writeln!(out, "History cleared.")?,
                Err(e) => writeln!(out, "Could not clear history: {e}")?,
            },
            ShellCommand::ShowInput(on) => show_input = on,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}

fn report<S: KeyValueStore, W: Write>(
    session: &HashSession<S>,
    out: &mut W,
    outcome: &HashOutcome,
    show_input: bool,
) -> Result<()> {
    match outcome {
        HashOutcome::Busy => writeln!(out, "A hash is already in progress.")?,
        HashOutcome::Failed(reason) => {
            writeln!(out, "{}", format_panel(&session.panel()))?;
            writeln!(out, "hash failed: {reason}")?;
        }
        HashOutcome::Empty | HashOutcome::Hashed(_) => {
            if show_input && matches!(outcome, HashOutcome::Hashed(_)) {
                writeln!(out, "input:  {}", session.input())?;
            }
            writeln!(out, "{}", format_panel(&session.panel()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Osc52Clipboard;
    use hashpad_core::{HistoryStore, MemoryStore};
    use hashpad_crypto::Sha256Provider;
    use std::sync::Arc;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn session() -> HashSession<MemoryStore> {
        HashSession::new(
            Arc::new(Sha256Provider::new()),
            HistoryStore::new(MemoryStore::new()),
        )
    }

    async fn drive(session: &HashSession<MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        let mut clip = Osc52Clipboard::new(Vec::new(), true);
        run(session, script.as_bytes(), &mut out, &mut clip, false)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_hash_keeps_text_verbatim() {
        assert_eq!(
            parse_line("hash  two  spaces ").unwrap(),
            Some(ShellCommand::Hash(" two  spaces ".into()))
        );
        assert_eq!(parse_line("hash").unwrap(), Some(ShellCommand::Hash(String::new())));
    }

    #[test]
    fn parse_other_commands() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("copy b64").unwrap(),
            Some(ShellCommand::Copy(PanelField::Base64))
        );
        assert_eq!(
            parse_line("history details").unwrap(),
            Some(ShellCommand::History { details: true })
        );
        assert_eq!(
            parse_line("history clear").unwrap(),
            Some(ShellCommand::ClearHistory)
        );
        assert_eq!(
            parse_line("file  /tmp/x.bin ").unwrap(),
            Some(ShellCommand::File(PathBuf::from("/tmp/x.bin")))
        );
        assert_eq!(parse_line("exit").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_line("copy sha1").is_err());
        assert!(parse_line("file").is_err());
        assert!(parse_line("show-input maybe").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[tokio::test]
    async fn hash_then_compare() {
        let s = session();
        let out = drive(
            &s,
            &format!("hash abc\ncompare {}\ncompare nope\n", ABC_HEX.to_uppercase()),
        )
        .await;
        assert!(out.contains(ABC_HEX));
        assert!(out.contains("Match ✅"));
        assert!(out.contains("Unrecognized digest format."));
        assert_eq!(s.history().len(), 1);
    }

    #[tokio::test]
    async fn clear_then_compare_has_nothing_to_match() {
        let s = session();
        let out = drive(&s, &format!("hash abc\nclear\ncompare {ABC_HEX}\n")).await;
        assert!(out.contains("No match ❌"));
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let s = session();
        drive(&s, "quit\nhash abc\n").await;
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn unknown_command_is_reported_and_loop_continues() {
        let s = session();
        let out = drive(&s, "bogus\nhash abc\n").await;
        assert!(out.contains("unknown command"));
        assert_eq!(s.history().len(), 1);
    }

    #[tokio::test]
    async fn history_listing_and_clearing() {
        let s = session();
        let out = drive(&s, "history\nhash abc\nhistory\nhistory clear\n").await;
        assert!(out.contains("No history."));
        assert!(out.contains("— text — ba7816bf8f01cfea..."));
        assert!(out.contains("History cleared."));
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn show_input_echoes_text() {
        let s = session();
        let out = drive(&s, "show-input on\nhash secret words\n").await;
        assert!(out.contains("input:  secret words"));
    }

    #[tokio::test]
    async fn copy_before_hash_has_nothing() {
        let s = session();
        let out = drive(&s, "copy hex\nhash abc\ncopy hex\n").await;
        assert!(out.contains("Nothing to copy."));
        assert!(out.contains("Copied to clipboard"));
    }
}
