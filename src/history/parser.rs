//! Streaming parser for zsh extended history.

use std::borrow::Cow;
use std::io::BufRead;

use super::assembler::RecordAssembler;
use super::line::Line;
use super::sanitize::{sanitize_line, strip_line_ending};
use super::{HistoryEntry, HistoryError};

/// A recovered problem found while parsing.
///
/// None of these stop the parse; they are reported alongside the entries so
/// callers can decide whether to log them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The header's timestamp does not fit an `i64`; the entry uses `0`.
    InvalidTimestamp { line: usize, digits: String },
    /// The line held malformed UTF-8 that was replaced with U+FFFD.
    InvalidEncoding { line: usize },
    /// A continuation line appeared with no entry open and was dropped.
    OrphanContinuation { line: usize },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidTimestamp { line, digits } => {
                write!(f, "line {}: unparseable timestamp {:?}, using 0", line, digits)
            }
            Diagnostic::InvalidEncoding { line } => {
                write!(f, "line {}: invalid UTF-8 replaced", line)
            }
            Diagnostic::OrphanContinuation { line } => {
                write!(f, "line {}: continuation line with no preceding entry dropped", line)
            }
        }
    }
}

/// Entries parsed from a history stream, oldest first.
#[derive(Debug, Default)]
pub struct ParsedHistory {
    pub entries: Vec<HistoryEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse zsh extended history from a reader.
///
/// Any read error aborts the parse and no entries are returned. Line numbers
/// in diagnostics and errors are 1-based.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<ParsedHistory, HistoryError> {
    let mut parsed = ParsedHistory::default();
    let mut assembler = RecordAssembler::new();
    let mut raw = Vec::new();
    let mut line_number = 0;

    loop {
        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .map_err(|source| HistoryError::Read {
                line: line_number + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let line = sanitize_line(strip_line_ending(&raw));
        if let Cow::Owned(_) = line {
            parsed
                .diagnostics
                .push(Diagnostic::InvalidEncoding { line: line_number });
        }

        match Line::classify(&line) {
            Line::Header {
                timestamp,
                digits,
                command,
            } => {
                let timestamp = timestamp.unwrap_or_else(|| {
                    parsed.diagnostics.push(Diagnostic::InvalidTimestamp {
                        line: line_number,
                        digits: digits.to_string(),
                    });
                    0
                });
                parsed.entries.extend(assembler.start(timestamp, command));
            }
            Line::Continuation(text) => {
                if !assembler.append(text) {
                    parsed
                        .diagnostics
                        .push(Diagnostic::OrphanContinuation { line: line_number });
                }
            }
        }
    }

    parsed.entries.extend(assembler.finish());
    Ok(parsed)
}
