//! Header/continuation classification for zsh history lines.
//!
//! With `EXTENDED_HISTORY` set, zsh writes each command as
//!
//! ```text
//! : 1700000000:0;git status
//! ```
//!
//! i.e. a `": "` marker, the start time in epoch seconds, `:`, the elapsed
//! duration, `;`, then the command. Lines that do not have this shape belong
//! to the command above them.

/// Prefix every header line starts with.
const MARKER: &str = ": ";

/// Minimum number of digits in the timestamp field.
const MIN_TIMESTAMP_DIGITS: usize = 10;

/// One classified history line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new entry.
    Header {
        /// Parsed start time, `None` if the digits overflow an `i64`.
        timestamp: Option<i64>,
        /// The raw timestamp digits.
        digits: &'a str,
        /// Initial command text, never empty.
        command: &'a str,
    },
    /// Extends the currently open entry.
    Continuation(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a sanitized line (without its line terminator).
    pub fn classify(line: &'a str) -> Self {
        parse_header(line).unwrap_or(Line::Continuation(line))
    }

    #[cfg(test)]
    fn is_header(&self) -> bool {
        matches!(self, Line::Header { .. })
    }
}

fn parse_header(line: &str) -> Option<Line<'_>> {
    let rest = line.strip_prefix(MARKER)?;

    let digits_len = leading_digits(rest);
    if digits_len < MIN_TIMESTAMP_DIGITS {
        return None;
    }
    let (digits, rest) = rest.split_at(digits_len);

    let rest = rest.strip_prefix(':')?;
    let elapsed_len = leading_digits(rest);
    if elapsed_len == 0 {
        return None;
    }

    let command = rest[elapsed_len..].strip_prefix(';')?;
    if command.is_empty() {
        return None;
    }

    Some(Line::Header {
        timestamp: digits.parse().ok(),
        digits,
        command,
    })
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
