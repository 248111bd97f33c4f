//! Rendering history entries as prompt context.

use crate::history::{recent_slice, HistoryEntry};

/// Text used when there is no history to show.
pub const NO_CONTEXT: &str = "No specific user history context provided.\n\n";

/// Render the most recent `max_entries` commands under an underlined title.
///
/// One command per line, oldest first. `max_entries == 0` renders all of
/// them. Multi-line commands keep their embedded newlines.
pub fn format_context(title: &str, entries: &[HistoryEntry], max_entries: usize) -> String {
    if entries.is_empty() {
        return NO_CONTEXT.to_string();
    }

    let limit = i64::try_from(max_entries).unwrap_or(i64::MAX);
    let shown = recent_slice(entries, limit);
    let rule = "-".repeat(title.chars().count() + 1);

    let mut out = String::with_capacity(title.len() * 3 + shown.len() * 32);
    out.push_str(title);
    out.push_str(":\n");
    out.push_str(&rule);
    out.push('\n');
    for entry in shown {
        out.push_str(&entry.command);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push_str("\n\n");
    out
}
