//! Zsh extended-history parsing.
//!
//! Turns the raw `~/.zsh_history` log into an ordered list of
//! [`HistoryEntry`] values. The pipeline runs in one forward pass:
//!
//! - [`sanitize`] - decode raw line bytes, replacing malformed UTF-8
//! - [`line`] - classify each line as a header or a continuation
//! - [`assembler`] - join continuation lines into the open entry
//! - [`window`] - keep only the most recent N entries
//!
//! [`parse_reader`] drives the first three stages over any `BufRead`;
//! [`ZshHistory`] adds file location, opening and windowing on top.

mod assembler;
mod error;
mod line;
mod parser;
mod sanitize;
mod window;
mod zsh;

use serde::Serialize;

pub use assembler::RecordAssembler;
pub use error::HistoryError;
pub use line::Line;
pub use parser::{parse_reader, Diagnostic, ParsedHistory};
pub use sanitize::{sanitize_line, strip_line_ending};
pub use window::{most_recent, recent_slice};
pub use zsh::ZshHistory;

/// A single command from the shell history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Seconds since the epoch, `0` when the header's timestamp was unusable.
    pub timestamp: i64,
    /// The command text, trimmed.
    pub command: String,
}

impl HistoryEntry {
    pub fn new(timestamp: i64, command: impl Into<String>) -> Self {
        Self {
            timestamp,
            command: command.into(),
        }
    }
}

/// A source of shell history entries.
pub trait HistoryReader {
    /// Read the history, keeping only the `limit` most recent entries.
    ///
    /// A `limit` of zero or below keeps everything.
    fn read_history(&self, limit: i64) -> Result<Vec<HistoryEntry>, HistoryError>;
}
