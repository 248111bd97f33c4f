//! Parsing real history files through the public API.

use super::helpers::{fixtures_dir, temp_history};
use historai::history::{parse_reader, Diagnostic};
use historai::{HistoryEntry, HistoryError, HistoryReader, ZshHistory};

#[test]
fn fixture_parses_into_expected_entries() {
    let history = ZshHistory::new(fixtures_dir().join("zsh_history"));
    let entries = history.read_history(0).unwrap();

    assert_eq!(
        entries,
        vec![
            HistoryEntry::new(1_700_000_000, "ls -la"),
            HistoryEntry::new(1_700_000_010, "git commit -m 'fix bug'"),
            HistoryEntry::new(1_700_000_020, "cat <<EOF\nhello\nEOF"),
            HistoryEntry::new(1_700_000_030, "echo caf\u{FFFD}"),
            HistoryEntry::new(1_700_000_040, "ssh deploy@web01"),
        ]
    );
}

#[test]
fn fixture_window_keeps_newest() {
    let history = ZshHistory::new(fixtures_dir().join("zsh_history"));
    let entries = history.read_history(2).unwrap();

    let commands: Vec<_> = entries.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, vec!["echo caf\u{FFFD}", "ssh deploy@web01"]);
}

#[test]
fn limit_larger_than_history_returns_everything() {
    let history = ZshHistory::new(fixtures_dir().join("zsh_history"));
    assert_eq!(history.read_history(1000).unwrap().len(), 5);
    assert_eq!(history.read_history(-1).unwrap().len(), 5);
}

#[test]
fn empty_file_has_no_entries() {
    let (_dir, path) = temp_history(b"");
    let history = ZshHistory::new(&path);
    assert!(history.read_history(10).unwrap().is_empty());
}

#[test]
fn missing_file_is_reported_before_parsing() {
    let (dir, _) = temp_history(b"");
    let history = ZshHistory::new(dir.path().join("nope"));
    let err = history.read_history(10).unwrap_err();
    assert!(matches!(err, HistoryError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn diagnostics_cover_every_recovered_problem() {
    let input: &[u8] = b"orphan\n: 123456789012345678901:0;ls\n: 1700000000:0;echo \xff\n";
    let parsed = parse_reader(input).unwrap();

    assert_eq!(
        parsed.entries,
        vec![
            HistoryEntry::new(0, "ls"),
            HistoryEntry::new(1_700_000_000, "echo \u{FFFD}"),
        ]
    );
    assert_eq!(
        parsed.diagnostics,
        vec![
            Diagnostic::OrphanContinuation { line: 1 },
            Diagnostic::InvalidTimestamp {
                line: 2,
                digits: "123456789012345678901".to_string(),
            },
            Diagnostic::InvalidEncoding { line: 3 },
        ]
    );
}

#[test]
fn no_entry_contains_invalid_utf8() {
    let mut input = Vec::new();
    for i in 0..50u8 {
        input.extend_from_slice(format!(": {}:0;cmd {} ", 1_700_000_000 + i as u64, i).as_bytes());
        input.push(0x80 | i);
        input.push(b'\n');
    }

    let parsed = parse_reader(input.as_slice()).unwrap();
    assert_eq!(parsed.entries.len(), 50);
    for entry in &parsed.entries {
        assert!(entry.command.contains('\u{FFFD}'), "{:?}", entry.command);
        assert!(entry.command.starts_with("cmd "));
    }
}
