//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: stat, list and remove, the only filesystem access the
//!   cleanup needs

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
