//! The store seam consumed by a cache-orchestration layer

use crate::concurrent::Completion;
use chrono::{DateTime, Utc};
use feedstore_core::{CachedFeed, FeedItem};

/// A single-slot feed cache.
///
/// Each method queues its operation before returning and answers exactly once
/// through the returned [`Completion`]. Retrieves may run together; inserts and
/// deletes run alone, in the order they were called.
pub trait FeedStore: Send + Sync {
    /// Read the current snapshot, or [`CachedFeed::Empty`] if there is none
    fn retrieve(&self) -> Completion<CachedFeed>;

    /// Replace whatever is stored with `items` and `timestamp`
    fn insert(&self, items: Vec<FeedItem>, timestamp: DateTime<Utc>) -> Completion<()>;

    /// Remove the stored snapshot; succeeds if there is none
    fn delete_cached_feed(&self) -> Completion<()>;
}
