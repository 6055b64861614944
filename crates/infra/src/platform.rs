// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Centralizes the OS-specific translation of `std::fs::Metadata` into the
//! workspace's [`FileMode`].

use std::fs::{FileType, Metadata};

use dump_cleanup_shared_kernel::{EntryKind, FileMode};

pub fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

pub fn file_mode(metadata: &Metadata) -> FileMode {
    FileMode::new(entry_kind(metadata.file_type()), permission_bits(metadata))
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

// Windows only exposes the read-only attribute.
#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    let base = if metadata.is_dir() { 0o777 } else { 0o666 };
    if metadata.permissions().readonly() { base & 0o555 } else { base }
}
