// crates/infra/src/filesystem.rs
use std::{fs, io, path::Path};

use dump_cleanup_ports::filesystem::{DirEntryDto, FileStat, FileSystem};
use log::warn;

use crate::platform;

/// Filesystem adapter backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    // Follows symlinks, so a link to a directory counts as a directory.
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat::new(platform::file_mode(&metadata)))
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryDto>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            match entry.file_name().into_string() {
                Ok(name) => entries.push(DirEntryDto { name, is_dir }),
                // Cannot be rebuilt into a path from a lossy name; leave it alone.
                Err(raw) => warn!("skipping non UTF-8 entry {:?} in {}", raw, path.display()),
            }
        }
        Ok(entries)
    }

    /// Removes a file, or an empty directory.
    fn remove(&self, path: &Path) -> io::Result<()> {
        let metadata = fs::symlink_metadata(path)?;
        if metadata.is_dir() { fs::remove_dir(path) } else { fs::remove_file(path) }
    }
}
