//! Claude backend implementation.
//!
//! Invokes the Claude CLI with `--print` for a plain-text answer.

use super::{run_agent, AgentBackend, BackendError, BackendResult};
use std::time::Duration;

/// Backend for Claude CLI.
///
/// Uses `claude --print` for non-interactive use.
#[derive(Debug, Clone, Default)]
pub struct ClaudeBackend;

impl ClaudeBackend {
    /// Create a new Claude backend.
    pub fn new() -> Self {
        Self
    }

    /// Get the CLI command name.
    fn command() -> &'static str {
        "claude"
    }
}

impl AgentBackend for ClaudeBackend {
    fn name(&self) -> &'static str {
        "Claude"
    }

    fn is_available(&self) -> bool {
        super::command_exists(Self::command())
    }

    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String> {
        if !self.is_available() {
            return Err(BackendError::NotAvailable(
                "claude CLI not found in PATH".to_string(),
            ));
        }

        run_agent(Self::command(), &["--print"], prompt, timeout)
    }
}
