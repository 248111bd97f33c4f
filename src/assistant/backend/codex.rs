//! Codex backend implementation.
//!
//! Invokes the Codex CLI with `exec`. Codex prints progress around the
//! answer, so callers should expect some extra text in the output.

use super::{run_agent, AgentBackend, BackendError, BackendResult};
use std::time::Duration;

/// Backend for Codex CLI.
///
/// Uses `codex exec` for non-interactive use.
#[derive(Debug, Clone, Default)]
pub struct CodexBackend;

impl CodexBackend {
    /// Create a new Codex backend.
    pub fn new() -> Self {
        Self
    }

    /// Get the CLI command name.
    fn command() -> &'static str {
        "codex"
    }
}

impl AgentBackend for CodexBackend {
    fn name(&self) -> &'static str {
        "Codex"
    }

    fn is_available(&self) -> bool {
        super::command_exists(Self::command())
    }

    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String> {
        if !self.is_available() {
            return Err(BackendError::NotAvailable(
                "codex CLI not found in PATH".to_string(),
            ));
        }

        run_agent(Self::command(), &["exec"], prompt, timeout)
    }
}
