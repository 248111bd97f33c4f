//! History reading errors.

use std::path::PathBuf;

/// Errors that stop history from being read.
///
/// Recoverable problems (bad timestamps, bad encoding, orphan lines) are not
/// errors; see [`Diagnostic`](super::Diagnostic).
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Zsh history file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading history file {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to open history file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine home directory to locate ~/.zsh_history")]
    NoHomeDir,

    #[error("Error reading history data at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    /// Map an `open` failure onto the matching variant.
    pub fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Open { path, source },
        }
    }
}
