//! Terminal output for command results.
//!
//! Headers and status messages go to stderr so stdout carries only
//! commands and can be piped.

use std::io::{self, Write};

use chrono::{Local, TimeZone};

use crate::assistant::Answer;
use crate::history::HistoryEntry;

/// Write an assistant answer.
///
/// Commands go to `out` under a header on `err`. A no-match answer writes
/// `no_match` to `err` and nothing to `out`.
pub fn write_answer<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    answer: &Answer,
    header: &str,
    no_match: &str,
) -> io::Result<()> {
    match answer {
        Answer::Commands(text) => {
            writeln!(err, "\n{}", header)?;
            writeln!(out, "{}", text.trim())?;
        }
        Answer::NoMatch => {
            tracing::warn!("{}", no_match);
            writeln!(err, "{}", no_match)?;
        }
    }
    Ok(())
}

/// Format an entry for `historai history`.
///
/// With `timestamps`, the command is prefixed with the local start time,
/// or `-` when the time is unknown.
pub fn format_entry(entry: &HistoryEntry, timestamps: bool) -> String {
    if !timestamps {
        return entry.command.clone();
    }
    format!("{}  {}", format_timestamp(entry.timestamp), entry.command)
}

fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "-".to_string();
    }
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
