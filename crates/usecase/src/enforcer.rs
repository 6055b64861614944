use std::{
    io,
    path::{Path, PathBuf},
};

use dump_cleanup_domain::{CleanupConfig, DirEntry, RetentionDecision};
use dump_cleanup_ports::filesystem::{DirEntryDto, FileSystem};
use dump_cleanup_shared_kernel::{CleanupError, Result};
use log::{debug, info, warn};

use crate::dto::CleanupReport;

/// Keeps a heap dump folder under its configured dump count.
///
/// Every run derives its decision from a fresh listing; nothing is remembered
/// between runs. Deletion stops at the first failure and does not roll back.
pub struct RetentionEnforcer<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> RetentionEnforcer<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn run(&self, config: &CleanupConfig) -> Result<CleanupReport> {
        let limit = config.validate()?;
        let folder = config.folder_path();

        self.ensure_directory(folder)?;
        let entries = self.list(folder)?;

        let decision = RetentionDecision::decide(entries, limit);
        let kept = decision.keep().len();
        let deleted = self.delete_all(folder, decision.excess())?;

        info!("{}: kept {kept} heap dump(s), deleted {}", folder.display(), deleted.len());
        Ok(CleanupReport { folder: folder.to_path_buf(), limit: limit.get(), kept, deleted })
    }

    fn ensure_directory(&self, folder: &Path) -> Result<()> {
        let stat = match self.fs.stat(folder) {
            Ok(stat) => stat,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CleanupError::path(folder, "does not exist"));
            }
            Err(err) => return Err(CleanupError::path_io(folder, err)),
        };
        if !stat.is_dir() {
            return Err(CleanupError::path(folder, format!("not a directory (mode: {})", stat.mode)));
        }
        Ok(())
    }

    fn list(&self, folder: &Path) -> Result<Vec<DirEntry>> {
        let entries = self.fs.list_dir(folder).map_err(|err| CleanupError::path_io(folder, err))?;
        debug!("{}: {} entries listed", folder.display(), entries.len());
        Ok(entries.into_iter().map(port_to_domain_entry).collect())
    }

    fn delete_all(&self, folder: &Path, excess: &[DirEntry]) -> Result<Vec<PathBuf>> {
        let mut deleted = Vec::with_capacity(excess.len());
        for entry in excess {
            let path = folder.join(&entry.name);
            if let Err(err) = self.fs.remove(&path) {
                warn!("stopping after {} deletion(s): {}: {err}", deleted.len(), path.display());
                return Err(CleanupError::delete(path, err));
            }
            info!("deleted {}", path.display());
            deleted.push(path);
        }
        Ok(deleted)
    }
}

fn port_to_domain_entry(entry: DirEntryDto) -> DirEntry {
    DirEntry { name: entry.name, is_dir: entry.is_dir }
}
