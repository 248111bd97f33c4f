//! Byte-level cleanup of raw history lines.

use std::borrow::Cow;

/// Decode a raw history line as UTF-8.
///
/// Valid input is borrowed unchanged. Each run of malformed bytes is
/// replaced with a single U+FFFD and decoding carries on, so this never
/// fails and never drops the line.
pub fn sanitize_line(bytes: &[u8]) -> Cow<'_, str> {
    let mut rest = match std::str::from_utf8(bytes) {
        Ok(text) => return Cow::Borrowed(text),
        Err(_) => bytes,
    };

    let mut text = String::with_capacity(bytes.len());
    let mut in_invalid_run = false;
    loop {
        let err = match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(err) => err,
        };

        let (valid, invalid) = rest.split_at(err.valid_up_to());
        if !valid.is_empty() {
            text.push_str(&String::from_utf8_lossy(valid));
            in_invalid_run = false;
        }
        if !in_invalid_run {
            text.push(char::REPLACEMENT_CHARACTER);
            in_invalid_run = true;
        }

        match err.error_len() {
            Some(len) => rest = &invalid[len..],
            None => break,
        }
    }
    Cow::Owned(text)
}

/// Strip a trailing `\n` or `\r\n` from a line read with `read_until`.
pub fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
