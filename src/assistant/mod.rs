//! Asking an AI agent about shell history.
//!
//! [`HistoryAssistant`] renders history entries into a fixed prompt, sends
//! it to an [`AgentBackend`] and interprets the reply.
//!
//! # Module Structure
//!
//! - [`backend`] - agent CLI backends (Claude, Codex, Gemini)
//! - [`context`] - history rendering for prompts
//! - [`prompt`] - prompt templates

pub mod backend;
pub mod context;
pub mod prompt;

pub use backend::{AgentBackend, BackendError, BackendKind};
pub use context::format_context;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::AssistantConfig;
use crate::history::HistoryEntry;
use prompt::{find_prompt, suggest_prompt, NO_MATCH_REPLY, NO_SUGGESTION_REPLY};

/// Errors from an assistant request.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Request blocked due to safety settings: {0}")]
    Blocked(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// What the agent answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Commands, one per line.
    Commands(String),
    /// The agent found nothing relevant or returned nothing.
    NoMatch,
}

/// Finds and suggests commands through an agent backend.
pub struct HistoryAssistant {
    backend: Box<dyn AgentBackend>,
    timeout: Duration,
    find_context_limit: usize,
    suggest_context_limit: usize,
}

impl HistoryAssistant {
    pub fn new(backend: Box<dyn AgentBackend>, config: &AssistantConfig) -> Self {
        Self {
            backend,
            timeout: config.timeout(),
            find_context_limit: config.find_context_limit,
            suggest_context_limit: config.suggest_context_limit,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Pick the commands in `entries` that match a natural language query.
    ///
    /// An empty history short-circuits to [`Answer::NoMatch`] without
    /// calling the agent.
    pub fn find(&self, query: &str, entries: &[HistoryEntry]) -> Result<Answer, AssistantError> {
        let query = non_empty(query)?;
        if entries.is_empty() {
            warn!("Cannot search history: no entries to search");
            return Ok(Answer::NoMatch);
        }

        let prompt = find_prompt(query, entries, self.find_context_limit);
        let reply = self.ask(&prompt)?;
        Ok(interpret(&reply, NO_MATCH_REPLY))
    }

    /// Suggest commands for a task, using `entries` as optional context.
    pub fn suggest(&self, task: &str, entries: &[HistoryEntry]) -> Result<Answer, AssistantError> {
        let task = non_empty(task)?;
        let prompt = suggest_prompt(task, entries, self.suggest_context_limit);
        let reply = self.ask(&prompt).map_err(|err| match err {
            AssistantError::Backend(BackendError::ExitCode { stderr, .. })
                if mentions_safety_block(&stderr) =>
            {
                AssistantError::Blocked(stderr.trim().to_string())
            }
            other => other,
        })?;
        Ok(interpret(&reply, NO_SUGGESTION_REPLY))
    }

    fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
        debug!(
            backend = self.backend.name(),
            prompt_len = prompt.len(),
            "Sending prompt to agent"
        );
        let reply = self.backend.invoke(prompt, self.timeout)?;
        debug!(reply_len = reply.len(), "Received reply from agent");
        Ok(reply)
    }
}

fn non_empty(query: &str) -> Result<&str, AssistantError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AssistantError::EmptyQuery);
    }
    Ok(query)
}

fn mentions_safety_block(stderr: &str) -> bool {
    let lower = stderr.to_lowercase();
    lower.contains("blocked") && lower.contains("safety")
}

/// Turn a raw agent reply into an [`Answer`].
///
/// Surrounding code fences are removed. An empty reply or the agreed
/// `sentinel` phrase means nothing was found.
fn interpret(reply: &str, sentinel: &str) -> Answer {
    let text = strip_code_fence(reply.trim()).trim();
    let bare = text.trim_matches(|c: char| c == '\'' || c == '"');
    if text.is_empty() || bare == sentinel {
        info!("Agent reported no result");
        return Answer::NoMatch;
    }
    Answer::Commands(text.to_string())
}

/// Remove a Markdown code fence wrapping the whole reply.
fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (```sh) on the opening line.
    match inner.split_once('\n') {
        Some((_, body)) => body,
        None => inner,
    }
}
