//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`enforcer`]: validates the configuration, lists the heap dump folder
//!   and deletes the excess dumps through the filesystem port
//! - [`dto`]: the report handed back to presentation
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod enforcer;

pub use dto::CleanupReport;
pub use enforcer::RetentionEnforcer;
