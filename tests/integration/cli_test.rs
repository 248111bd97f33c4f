//! End-to-end runs of the `historai` binary.

use super::helpers::{fixtures_dir, historai, temp_history};
use predicates::prelude::*;
use tempfile::TempDir;

const HISTORY: &[u8] = b": 1700000000:0;ls -la\n: 1700000010:0;docker ps \\\n-a\n: 1700000020:0;ssh deploy@web01\n";
const BROKEN_CONFIG: &str = "[assistant]\nbackend = 3\n";

#[test]
fn history_prints_all_commands_oldest_first() {
    let (dir, path) = temp_history(HISTORY);
    historai(dir.path())
        .args(["history", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("ls -la\ndocker ps -a\nssh deploy@web01\n");
}

#[test]
fn history_limit_keeps_most_recent() {
    let (dir, path) = temp_history(HISTORY);
    historai(dir.path())
        .args(["history", "-n", "2", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("docker ps -a\nssh deploy@web01\n");
}

#[test]
fn history_json_emits_one_object_per_line() {
    let (dir, path) = temp_history(b": 1700000000:0;echo hello\nworld\n");
    historai(dir.path())
        .args(["history", "--json", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("{\"timestamp\":1700000000,\"command\":\"echo hello\\nworld\"}\n");
}

#[test]
fn history_uses_histfile_env() {
    let (dir, path) = temp_history(HISTORY);
    historai(dir.path())
        .env("HISTFILE", &path)
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout("ssh deploy@web01\n");
}

#[test]
fn history_defaults_to_home_zsh_history() {
    let home = TempDir::new().unwrap();
    std::fs::copy(
        fixtures_dir().join("zsh_history"),
        home.path().join(".zsh_history"),
    )
    .unwrap();

    historai(home.path())
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout("ssh deploy@web01\n");
}

#[test]
fn history_file_from_config() {
    let (dir, path) = temp_history(HISTORY);
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[history]\nfile = {:?}\n", path.to_str().unwrap()),
    )
    .unwrap();

    historai(dir.path())
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout("ssh deploy@web01\n");
}

#[test]
fn missing_history_file_fails() {
    let dir = TempDir::new().unwrap();
    historai(dir.path())
        .args(["history", "--file"])
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_config_fails_with_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), BROKEN_CONFIG).unwrap();
    historai(dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn config_path_works_with_broken_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), BROKEN_CONFIG).unwrap();
    historai(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_work_with_broken_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), BROKEN_CONFIG).unwrap();
    historai(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success();
}

#[test]
fn config_edit_opens_editor_on_broken_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), BROKEN_CONFIG).unwrap();

    // The editor leaves the file as it was, so only the post-edit check fails.
    historai(dir.path())
        .env("EDITOR", "true")
        .args(["config", "edit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Opening"))
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[cfg(unix)]
#[test]
fn config_edit_can_repair_broken_config() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, BROKEN_CONFIG).unwrap();

    let editor = dir.path().join("fix-config");
    std::fs::write(
        &editor,
        "#!/bin/sh\nprintf '[assistant]\\nbackend = \"claude\"\\n' > \"$1\"\n",
    )
    .unwrap();
    std::fs::set_permissions(&editor, std::fs::Permissions::from_mode(0o755)).unwrap();

    historai(dir.path())
        .env("EDITOR", &editor)
        .args(["config", "edit"])
        .assert()
        .success();

    historai(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend = \"claude\""));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    historai(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[history]"))
        .stdout(predicate::str::contains("find_limit = 300"))
        .stdout(predicate::str::contains("backend = \"gemini\""));
}

#[test]
fn config_path_respects_env() {
    let dir = TempDir::new().unwrap();
    historai(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_for_zsh() {
    let dir = TempDir::new().unwrap();
    historai(dir.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef historai"));
}

#[test]
fn find_with_empty_history_does_not_call_agent() {
    let (dir, path) = temp_history(b"");
    historai(dir.path())
        .env("PATH", dir.path())
        .args(["find", "anything", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No relevant commands found."));
}

#[test]
fn find_without_agent_installed_fails() {
    let (dir, path) = temp_history(HISTORY);
    historai(dir.path())
        .env("PATH", dir.path())
        .args(["find", "list files", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("gemini CLI not found in PATH"));
}

#[test]
fn blank_query_is_rejected() {
    let (dir, path) = temp_history(HISTORY);
    historai(dir.path())
        .args(["find", "  ", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("query cannot be empty"));
}

/// Put an `echo` masquerading as the agent on a private PATH.
///
/// The "answer" is then the prompt itself, which shows what was sent.
#[cfg(unix)]
fn echo_agent(dir: &std::path::Path, name: &str) -> Option<std::path::PathBuf> {
    // Multi-call binaries (busybox) dispatch on argv[0], so require a real echo.
    let echo = ["/bin/echo", "/usr/bin/echo"]
        .iter()
        .filter_map(|p| std::fs::canonicalize(p).ok())
        .find(|p| p.file_name().map_or(false, |n| n == "echo"))?;
    let bin = dir.join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    std::os::unix::fs::symlink(echo, bin.join(name)).unwrap();
    Some(bin)
}

#[cfg(unix)]
#[test]
fn find_sends_windowed_history_to_agent() {
    let (dir, path) = temp_history(HISTORY);
    let Some(bin) = echo_agent(dir.path(), "claude") else {
        return;
    };

    historai(dir.path())
        .env("PATH", &bin)
        .args(["find", "-n", "2", "--backend", "claude", "the ssh command", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("--- Found Commands ---"))
        .stdout(predicate::str::contains("ssh deploy@web01"))
        .stdout(predicate::str::contains("docker ps -a"))
        .stdout(predicate::str::contains("ls -la").not());
}

#[cfg(unix)]
#[test]
fn suggest_without_history_context_skips_history() {
    let dir = TempDir::new().unwrap();
    let Some(bin) = echo_agent(dir.path(), "gemini") else {
        return;
    };

    // The history file does not exist; it must not be opened.
    historai(dir.path())
        .env("PATH", &bin)
        .args(["suggest", "--no-history-context", "make a gif", "--file"])
        .arg(dir.path().join("absent"))
        .assert()
        .success()
        .stderr(predicate::str::contains("--- Suggested Commands ---"))
        .stdout(predicate::str::contains("Task: \"make a gif\""))
        .stdout(predicate::str::contains(
            "No specific user history context provided.",
        ));
}
