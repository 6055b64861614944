// crates/infra/src/memory.rs
//! In-memory filesystem for deterministic tests.
//!
//! Paths are compared component-wise, so `dumps`, `dumps/` and `./dumps`
//! address the same node only when they normalize to the same components.

use std::{
    collections::{BTreeMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use dump_cleanup_ports::filesystem::{DirEntryDto, FileStat, FileSystem};
use dump_cleanup_shared_kernel::{EntryKind, FileMode};

const DIR_PERMISSIONS: u32 = 0o755;
const FILE_PERMISSIONS: u32 = 0o644;

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, FileMode>,
    failing_removals: HashSet<PathBuf>,
    failing_listings: HashSet<PathBuf>,
    failing_stats: HashSet<PathBuf>,
}

/// A flat map of paths to modes behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<State>,
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates `path` and every missing ancestor as directories.
    pub fn create_dir_all(&self, path: impl AsRef<Path>) {
        let mut state = self.state();
        insert_dirs(&mut state.nodes, &normalize(path.as_ref()));
    }

    /// Creates an empty regular file, adding missing parent directories.
    pub fn create_file(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut state = self.state();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut state.nodes, parent);
        }
        state.nodes.insert(path, FileMode::new(EntryKind::File, FILE_PERMISSIONS));
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state().nodes.contains_key(&normalize(path.as_ref()))
    }

    /// Sorted names of the direct children of `dir`.
    pub fn children(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = normalize(dir.as_ref());
        child_names(&self.state().nodes, &dir).collect()
    }

    /// Makes every later `remove` of `path` fail with `PermissionDenied`.
    pub fn fail_removal_of(&self, path: impl AsRef<Path>) {
        self.state().failing_removals.insert(normalize(path.as_ref()));
    }

    /// Makes every later `stat` of `path` fail with `PermissionDenied`.
    pub fn fail_stat_of(&self, path: impl AsRef<Path>) {
        self.state().failing_stats.insert(normalize(path.as_ref()));
    }

    /// Makes every later `list_dir` of `path` fail with `PermissionDenied`.
    pub fn fail_listing_of(&self, path: impl AsRef<Path>) {
        self.state().failing_listings.insert(normalize(path.as_ref()));
    }
}

fn insert_dirs(nodes: &mut BTreeMap<PathBuf, FileMode>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        nodes
            .entry(ancestor.to_path_buf())
            .or_insert_with(|| FileMode::new(EntryKind::Directory, DIR_PERMISSIONS));
    }
}

fn child_names<'a>(nodes: &'a BTreeMap<PathBuf, FileMode>, dir: &'a Path) -> impl Iterator<Item = String> + 'a {
    nodes
        .keys()
        .filter(move |p| p.parent() == Some(dir))
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: file does not exist", path.display()))
}

impl FileSystem for MemoryFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let path = normalize(path);
        let state = self.state();
        if state.failing_stats.contains(&path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        state.nodes.get(&path).copied().map(FileStat::new).ok_or_else(|| not_found(&path))
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryDto>> {
        let path = normalize(path);
        let state = self.state();
        if state.failing_listings.contains(&path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let mode = state.nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if !mode.is_dir() {
            return Err(io::Error::new(io::ErrorKind::NotADirectory, "not a directory"));
        }
        Ok(child_names(&state.nodes, &path)
            .map(|name| {
                let is_dir = state.nodes.get(&path.join(&name)).is_some_and(|m| m.is_dir());
                DirEntryDto { name, is_dir }
            })
            .collect())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let mut state = self.state();
        if state.failing_removals.contains(&path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let mode = state.nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if mode.is_dir() && child_names(&state.nodes, &path).next().is_some() {
            return Err(io::Error::new(io::ErrorKind::DirectoryNotEmpty, "directory not empty"));
        }
        state.nodes.remove(&path);
        Ok(())
    }
}
