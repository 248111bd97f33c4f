//! `historai find`

use anyhow::{Context, Result};

use historai::cli::{AgentArgs, HistorySource};
use historai::output::write_answer;
use historai::Config;

/// Search history for commands matching a natural language query.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    query: &str,
    source: &HistorySource,
    agent: &AgentArgs,
) -> Result<()> {
    tracing::debug!(query, "Executing find command");
    if query.trim().is_empty() {
        anyhow::bail!("query cannot be empty");
    }

    let entries = super::read_history(config, source, config.history.find_limit)?;
    let assistant = super::assistant(config, agent);

    let answer = assistant
        .find(query, &entries)
        .with_context(|| format!("Failed to get results from {}", assistant.backend_name()))?;

    write_answer(
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        &answer,
        "--- Found Commands ---",
        "No relevant commands found.",
    )?;
    Ok(())
}
