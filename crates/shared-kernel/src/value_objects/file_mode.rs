// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices and anything else that is neither.
    Other,
}

/// Node kind plus permission bits, rendered `ls`-style (`drwxr-xr-x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMode {
    kind: EntryKind,
    permissions: u32,
}

impl FileMode {
    pub const fn new(kind: EntryKind, permissions: u32) -> Self {
        Self { kind, permissions: permissions & 0o777 }
    }

    pub const fn kind(self) -> EntryKind {
        self.kind
    }

    pub const fn permissions(self) -> u32 {
        self.permissions
    }

    pub const fn is_dir(self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_char = match self.kind {
            EntryKind::File => '-',
            EntryKind::Directory => 'd',
            EntryKind::Other => '?',
        };
        let mut out = String::with_capacity(10);
        out.push(type_char);
        for shift in [6u32, 3, 0] {
            let triplet = (self.permissions >> shift) & 0o7;
            out.push(if triplet & 0o4 != 0 { 'r' } else { '-' });
            out.push(if triplet & 0o2 != 0 { 'w' } else { '-' });
            out.push(if triplet & 0o1 != 0 { 'x' } else { '-' });
        }
        f.write_str(&out)
    }
}
