//! The zsh history file as a [`HistoryReader`].

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{most_recent, parse_reader, HistoryEntry, HistoryError, HistoryReader};

/// File name of the zsh history inside the home directory.
const DEFAULT_FILE_NAME: &str = ".zsh_history";

/// Reads `~/.zsh_history` (or another zsh history file).
#[derive(Debug, Clone)]
pub struct ZshHistory {
    path: PathBuf,
}

impl ZshHistory {
    /// Use a specific history file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Find the history file to read.
    ///
    /// Uses `explicit` when given, then `$HISTFILE`, then `~/.zsh_history`.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, HistoryError> {
        Self::locate_with(explicit, std::env::var_os("HISTFILE"), dirs::home_dir())
    }

    fn locate_with(
        explicit: Option<&Path>,
        histfile: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<Self, HistoryError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Some(histfile) = histfile.filter(|h| !h.is_empty()) {
            return Ok(Self::new(histfile));
        }
        let home = home.ok_or(HistoryError::NoHomeDir)?;
        Ok(Self::new(home.join(DEFAULT_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole file without windowing.
    pub fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        debug!(path = %self.path.display(), "Using zsh history file");

        let file = File::open(&self.path).map_err(|e| {
            let err = HistoryError::from_open(self.path.clone(), e);
            warn!(path = %self.path.display(), error = %err, "Failed to open zsh history file");
            err
        })?;

        let parsed = parse_reader(BufReader::new(file))?;
        for diagnostic in &parsed.diagnostics {
            debug!(path = %self.path.display(), "{}", diagnostic);
        }
        debug!(
            entries = parsed.entries.len(),
            recovered = parsed.diagnostics.len(),
            "Parsed zsh history"
        );

        Ok(parsed.entries)
    }
}

impl HistoryReader for ZshHistory {
    fn read_history(&self, limit: i64) -> Result<Vec<HistoryEntry>, HistoryError> {
        let entries = self.read_all()?;
        if limit > 0 && entries.len() as u64 > limit as u64 {
            debug!(limit, initial_count = entries.len(), "Applying limit");
        }
        Ok(most_recent(entries, limit))
    }
}
