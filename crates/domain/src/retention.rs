// crates/domain/src/retention.rs
use std::cmp::Ordering;

use log::debug;

use crate::{config::RetentionLimit, model::DirEntry};

/// Newest-first ordering: names that sort later come first.
///
/// Dump names usually embed a timestamp, so the byte-wise reverse name order
/// approximates reverse creation order without looking at file metadata.
#[inline]
pub fn newest_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.name.cmp(&a.name)
}

/// The keep/excess split for one run, computed from a single listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionDecision {
    keep: Vec<DirEntry>,
    excess: Vec<DirEntry>,
}

impl RetentionDecision {
    /// Filters `entries` to managed files, orders them newest first and
    /// splits them against `limit`.
    ///
    /// Nothing is excess when the limit is disabled or when there are fewer
    /// managed files than the limit. Otherwise the first `limit - 1` files
    /// survive.
    pub fn decide(entries: impl IntoIterator<Item = DirEntry>, limit: RetentionLimit) -> Self {
        let mut managed: Vec<DirEntry> = entries.into_iter().filter(DirEntry::is_managed).collect();
        managed.sort_by(newest_first);

        if limit.is_disabled() || managed.len() < limit.get() {
            debug!("{} managed file(s), limit {}: nothing to delete", managed.len(), limit.get());
            return Self { keep: managed, excess: Vec::new() };
        }

        let excess = managed.split_off(limit.survivors());
        debug!("{} managed file(s), limit {}: {} excess", managed.len() + excess.len(), limit.get(), excess.len());
        Self { keep: managed, excess }
    }

    pub fn keep(&self) -> &[DirEntry] {
        &self.keep
    }

    /// Files to delete, in deletion order.
    pub fn excess(&self) -> &[DirEntry] {
        &self.excess
    }

    pub fn is_noop(&self) -> bool {
        self.excess.is_empty()
    }
}
