//! Gemini backend implementation.
//!
//! Invokes the Gemini CLI with the prompt as its positional argument.

use super::{run_agent, AgentBackend, BackendError, BackendResult};
use std::time::Duration;

/// Backend for Gemini CLI.
///
/// Gemini is the default backend.
#[derive(Debug, Clone, Default)]
pub struct GeminiBackend;

impl GeminiBackend {
    /// Create a new Gemini backend.
    pub fn new() -> Self {
        Self
    }

    /// Get the CLI command name.
    fn command() -> &'static str {
        "gemini"
    }
}

impl AgentBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    fn is_available(&self) -> bool {
        super::command_exists(Self::command())
    }

    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String> {
        if !self.is_available() {
            return Err(BackendError::NotAvailable(
                "gemini CLI not found in PATH".to_string(),
            ));
        }

        run_agent(Self::command(), &[], prompt, timeout)
    }
}
