//! `historai suggest`

use anyhow::{Context, Result};

use historai::cli::{AgentArgs, HistorySource};
use historai::output::write_answer;
use historai::Config;

/// Ask the agent for commands that accomplish a task.
///
/// Recent history is sent as context unless `no_history_context` is set,
/// in which case the history file is never opened.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    task: &str,
    source: &HistorySource,
    no_history_context: bool,
    agent: &AgentArgs,
) -> Result<()> {
    if task.trim().is_empty() {
        anyhow::bail!("task description cannot be empty");
    }

    let entries = if no_history_context {
        tracing::debug!("Skipping history reading as --no-history-context was provided");
        Vec::new()
    } else {
        let entries = super::read_history(config, source, config.history.suggest_limit)
            .context("Failed to read history for context")?;
        if entries.is_empty() {
            tracing::warn!("No history entries found to provide as context");
        }
        entries
    };

    let assistant = super::assistant(config, agent);
    let answer = assistant
        .suggest(task, &entries)
        .with_context(|| format!("Failed to get suggestions from {}", assistant.backend_name()))?;

    write_answer(
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        &answer,
        "--- Suggested Commands ---",
        "Cannot suggest a command for this task.",
    )?;
    Ok(())
}
