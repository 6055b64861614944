//! # Domain
//!
//! Retention rules for heap dump folders, free of any I/O.
//!
//! - [`config`]: the cleanup configuration and its validation
//! - [`model`]: directory entries and the managed-file convention
//! - [`retention`]: ordering and the keep/excess partition

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod retention;

pub use config::{CleanupConfig, RetentionLimit};
pub use model::{DirEntry, MANAGED_SUFFIX};
pub use retention::RetentionDecision;
