//! Configuration file handling.
//!
//! The config lives at `<config_dir>/historai/config.toml` unless
//! `$HISTORAI_CONFIG` points elsewhere. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assistant::BackendKind;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "HISTORAI_CONFIG";

/// Default number of entries `find` reads from history.
pub const DEFAULT_FIND_LIMIT: i64 = 300;
/// Default number of entries `suggest` reads from history.
pub const DEFAULT_SUGGEST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub assistant: AssistantConfig,
}

/// Where history comes from and how much of it to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// History file; falls back to `$HISTFILE`, then `~/.zsh_history`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub find_limit: i64,
    pub suggest_limit: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: None,
            find_limit: DEFAULT_FIND_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

/// Agent backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub backend: BackendKind,
    pub timeout_secs: u64,
    /// Most history lines put into a `find` prompt.
    pub find_context_limit: usize,
    /// Most history lines put into a `suggest` prompt.
    pub suggest_context_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            timeout_secs: 120,
            find_context_limit: 150,
            suggest_context_limit: 50,
        }
    }
}

impl AssistantConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("historai").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
