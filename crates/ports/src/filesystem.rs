// crates/ports/src/filesystem.rs
use std::{io, path::Path};

use dump_cleanup_shared_kernel::{EntryKind, FileMode};
use serde::{Deserialize, Serialize};

/// Status of a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub mode: FileMode,
}

impl FileStat {
    pub const fn new(mode: FileMode) -> Self {
        Self { mode }
    }

    pub const fn kind(&self) -> EntryKind {
        self.mode.kind()
    }

    pub const fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }
}

/// DTO representing one child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryDto {
    pub name: String,
    pub is_dir: bool,
}

/// Port for the filesystem operations a cleanup run performs.
///
/// A missing path must be reported as [`io::ErrorKind::NotFound`].
pub trait FileSystem: Send + Sync {
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Lists the direct children of `path` in no particular order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryDto>>;

    /// Removes a single entry. Removing something that no longer exists is an error.
    fn remove(&self, path: &Path) -> io::Result<()>;
}
