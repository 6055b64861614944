// crates/domain/src/config.rs
use std::path::Path;

use dump_cleanup_shared_kernel::{CleanupError, Result};
use serde::{Deserialize, Serialize};

/// Configuration handed to a cleanup run.
///
/// Both fields come from an untrusted source (environment, command line), so
/// an empty folder or a negative limit is representable and rejected by
/// [`CleanupConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupConfig {
    pub folder: String,
    pub limit: i64,
}

impl CleanupConfig {
    pub fn new(folder: impl Into<String>, limit: i64) -> Self {
        Self { folder: folder.into(), limit }
    }

    pub fn folder_path(&self) -> &Path {
        Path::new(&self.folder)
    }

    /// Checks the folder first, then the limit.
    pub fn validate(&self) -> Result<RetentionLimit> {
        if self.folder.is_empty() {
            return Err(CleanupError::config("heap dump folder is not set"));
        }
        let limit = usize::try_from(self.limit)
            .map_err(|_| CleanupError::config(format!("negative maximum dump count: {}", self.limit)))?;
        Ok(RetentionLimit::new(limit))
    }
}

/// A validated, non-negative dump count ceiling. Zero disables cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetentionLimit(usize);

impl RetentionLimit {
    pub const DISABLED: Self = Self(0);

    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn is_disabled(self) -> bool {
        self.0 == 0
    }

    /// Number of managed files that survive once the ceiling is reached.
    ///
    /// This is `limit - 1`, not `limit`: the newest dump is counted as the
    /// slot about to be taken by the next one. A limit of one therefore keeps
    /// nothing.
    pub const fn survivors(self) -> usize {
        self.0.saturating_sub(1)
    }
}
