use std::path::PathBuf;

use serde::Serialize;

/// Outcome of a successful cleanup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub folder: PathBuf,
    pub limit: usize,
    /// Managed files left in place.
    pub kept: usize,
    /// Removed paths in the order they were deleted (newest name first).
    pub deleted: Vec<PathBuf>,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}
