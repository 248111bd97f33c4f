//! Subcommand handlers.

pub mod config;
pub mod find;
pub mod history;
pub mod suggest;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;

use historai::cli::{AgentArgs, Cli, HistorySource};
use historai::{Config, HistoryAssistant, HistoryEntry, HistoryReader, ZshHistory};

/// Load config from `--config` or the default location.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit)?;
    Config::load_from(&path)
}

pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Read the most recent entries from the selected history file.
pub fn read_history(
    config: &Config,
    source: &HistorySource,
    default_limit: i64,
) -> Result<Vec<HistoryEntry>> {
    let explicit = source.file.as_deref().or(config.history.file.as_deref());
    let reader = ZshHistory::locate(explicit).context("Failed to initialize history reader")?;
    let limit = source.limit.unwrap_or(default_limit);

    let entries = reader
        .read_history(limit)
        .context("Failed to read history")?;
    tracing::debug!(entries = entries.len(), "History read successfully");
    Ok(entries)
}

/// Build the assistant for the backend chosen on the command line or in config.
pub fn assistant(config: &Config, agent: &AgentArgs) -> HistoryAssistant {
    let kind = agent.backend.unwrap_or(config.assistant.backend);
    tracing::debug!(backend = %kind, "Initializing agent backend");
    HistoryAssistant::new(kind.create(), &config.assistant)
}

/// Print shell completions to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "historai", &mut std::io::stdout());
    Ok(())
}
