// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_mode;

pub use file_mode::{EntryKind, FileMode};
