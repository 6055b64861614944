// crates/domain/src/model.rs
use serde::{Deserialize, Serialize};

/// Name suffix that marks a heap dump. Fixed, not configurable.
pub const MANAGED_SUFFIX: &str = ".hprof";

/// A single entry of the heap dump folder as seen at listing time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }

    /// Only the name decides; a directory called `x.hprof` is managed too.
    pub fn is_managed(&self) -> bool {
        self.name.ends_with(MANAGED_SUFFIX)
    }
}
