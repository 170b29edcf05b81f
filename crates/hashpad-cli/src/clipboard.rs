//! # Clipboard
//!
//! Best-effort clipboard writes using the OSC 52 terminal escape
//! (`ESC ] 52 ; c ; <base64> BEL`). Supporting terminals place the payload
//! on the system clipboard, including over SSH. When stdout is not a
//! terminal the write is refused instead of emitting escape bytes into a
//! pipe or file. Failures are reported once and never retried.

use std::io::{self, IsTerminal, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Clipboard write failure.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Output is redirected, so there is no terminal to receive the escape.
    #[error("stdout is not a terminal")]
    NotATerminal,

    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
}

/// Anything that can receive text for the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// OSC 52 clipboard over a byte sink.
pub struct Osc52Clipboard<W> {
    out: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// Clipboard over the process's stdout.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::NotATerminal);
        }
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}
