//! Command-line interface definitions.
//!
//! Kept in the library so completions and tests can build the same
//! `clap::Command` the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::assistant::BackendKind;

#[derive(Debug, Parser)]
#[command(
    name = "historai",
    version,
    about = "An AI-powered CLI tool to find and suggest commands based on shell history.",
    long_about = "historai helps you search your shell command history or get command \
suggestions using natural language. Find commands by what they do, not just keywords.\n\n\
Answers come from an AI agent CLI (gemini, claude or codex) that must be installed \
and on your PATH."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find commands in shell history using a natural language query
    #[command(after_help = "Examples:\n  \
historai find \"how I listed files sorted by size last month\"\n  \
historai find --limit 500 \"the ssh command to connect to the webserver\"")]
    Find {
        /// What the command did
        query: String,

        #[command(flatten)]
        source: HistorySource,

        #[command(flatten)]
        agent: AgentArgs,
    },

    /// Suggest shell commands for a task, using recent history as context
    #[command(after_help = "Examples:\n  \
historai suggest \"how to convert a video file to an animated gif\"\n  \
historai suggest --no-history-context \"recursively remove all .DS_Store files\"")]
    Suggest {
        /// The task to accomplish
        task: String,

        #[command(flatten)]
        source: HistorySource,

        /// Do not use shell history as context for suggestions
        #[arg(long)]
        no_history_context: bool,

        #[command(flatten)]
        agent: AgentArgs,
    },

    /// Print parsed history entries, oldest first
    History {
        #[command(flatten)]
        source: HistorySource,

        /// Print one JSON object per entry
        #[arg(long, conflicts_with = "timestamps")]
        json: bool,

        /// Prefix each command with its start time
        #[arg(short, long)]
        timestamps: bool,
    },

    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Which history to read and how much of it.
#[derive(Debug, Clone, Args)]
pub struct HistorySource {
    /// Number of most recent history entries to use (0 or less for all)
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Zsh history file to read (default: $HISTFILE or ~/.zsh_history)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct AgentArgs {
    /// Agent CLI to ask (overrides config)
    #[arg(short, long, value_enum)]
    pub backend: Option<BackendKind>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR, creating it if needed
    Edit,
}
