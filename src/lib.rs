//! historai - find and suggest shell commands from zsh history with an AI agent.
//!
//! The heart of the crate is [`history`], a streaming parser for zsh's
//! extended history format. [`assistant`] turns parsed entries into prompts
//! for an agent CLI, [`config`] holds user settings and [`cli`] defines the
//! command-line interface used by the `historai` binary.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod history;
pub mod output;

pub use assistant::{Answer, HistoryAssistant};
pub use config::Config;
pub use history::{HistoryEntry, HistoryError, HistoryReader, ZshHistory};
