//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("integration")
        .join("fixtures")
}

/// Write `content` to a history file inside a fresh temp dir.
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn temp_history(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("zsh_history");
    fs::write(&path, content).expect("write history file");
    (dir, path)
}

/// `historai` with an isolated environment: no user config, no HISTFILE.
pub fn historai(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("historai").expect("binary built");
    cmd.env("HOME", home)
        .env("HISTORAI_CONFIG", home.join("config.toml"))
        .env_remove("HISTFILE")
        .env_remove("RUST_LOG");
    cmd
}
