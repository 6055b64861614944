// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod memory;
pub mod platform;

pub use filesystem::OsFileSystem;
pub use memory::MemoryFileSystem;
