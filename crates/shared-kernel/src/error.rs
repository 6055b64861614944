// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is terminal for the current cleanup run.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// The configuration was rejected before touching the filesystem.
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// The heap dump folder cannot be opened as a directory.
    #[error("Cannot open heap dump folder '{path}': {reason}")]
    Path {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    /// A single heap dump could not be removed. Files deleted earlier in the
    /// same run stay deleted.
    #[error("Cannot delete heap dump file '{path}': {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanupError>;

impl CleanupError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config { reason: reason.into() }
    }

    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path { path: path.into(), reason: reason.into(), source: None }
    }

    /// Wraps an I/O failure on the folder itself, keeping its message as the reason.
    pub fn path_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path { path: path.into(), reason: source.to_string(), source: Some(source) }
    }

    pub fn delete(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Delete { path: path.into(), source }
    }

    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    pub const fn is_path(&self) -> bool {
        matches!(self, Self::Path { .. })
    }

    pub const fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }
}
