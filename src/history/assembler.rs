//! Multi-line entry reconstruction.

use super::HistoryEntry;

/// Accumulates the lines of the entry currently being read.
///
/// A single buffer is reused for every entry; an entry is "open" while the
/// buffer holds text. Continuation lines are joined in one of two ways:
///
/// - **escaped join**: the text so far ends with `\`, which is removed and
///   the line appended directly (a command split with a line-continuation
///   escape)
/// - **literal join**: a `\n` is inserted before the line (a command that
///   really spans several lines, e.g. a heredoc)
#[derive(Debug, Default)]
pub struct RecordAssembler {
    timestamp: i64,
    buffer: String,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry is currently being accumulated.
    pub fn is_open(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Begin a new entry, returning the previously open one if any.
    pub fn start(&mut self, timestamp: i64, command: &str) -> Option<HistoryEntry> {
        let finished = self.finish();
        self.timestamp = timestamp;
        self.buffer.push_str(command);
        finished
    }

    /// Join a continuation line onto the open entry.
    ///
    /// Returns `false` (and ignores the line) when no entry is open.
    pub fn append(&mut self, line: &str) -> bool {
        if !self.is_open() {
            return false;
        }

        if self.buffer.ends_with('\\') {
            self.buffer.pop();
        } else {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        true
    }

    /// Close the open entry, if any, and return it trimmed.
    ///
    /// The buffer only ever receives `&str` pieces, so the finished command
    /// is valid UTF-8 without a second sanitizing pass.
    pub fn finish(&mut self) -> Option<HistoryEntry> {
        if !self.is_open() {
            return None;
        }

        let entry = HistoryEntry::new(self.timestamp, self.buffer.trim());
        self.buffer.clear();
        self.timestamp = 0;
        Some(entry)
    }
}
