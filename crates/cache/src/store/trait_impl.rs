//! FeedStore implementation for FeedCacheStore

use crate::concurrent::{Access, Completion};
use crate::traits::FeedStore;
use chrono::{DateTime, Utc};
use feedstore_core::{CachedFeed, FeedItem, FeedSnapshot};
use feedstore_utils::tracing::operation_span;
use std::sync::Arc;
use tracing::Instrument;

use super::operations;
use super::types::FeedCacheStore;

impl FeedCacheStore {
    /// Read the stored snapshot. Runs alongside other retrieves.
    pub fn retrieve(&self) -> Completion<CachedFeed> {
        let path = Arc::clone(&self.path);
        let span = operation_span("retrieve", &path);
        self.queue.submit(
            Access::Shared,
            "retrieve",
            async move { operations::retrieve(&path).await }.instrument(span),
        )
    }

    /// Replace the stored snapshot. Runs alone.
    pub fn insert(&self, items: Vec<FeedItem>, timestamp: DateTime<Utc>) -> Completion<()> {
        let path = Arc::clone(&self.path);
        let span = operation_span("insert", &path);
        let snapshot = FeedSnapshot::new(items, timestamp);
        self.queue.submit(
            Access::Exclusive,
            "insert",
            async move { operations::insert(&path, snapshot).await }.instrument(span),
        )
    }

    /// Remove the stored snapshot. Runs alone.
    pub fn delete_cached_feed(&self) -> Completion<()> {
        let path = Arc::clone(&self.path);
        let span = operation_span("delete", &path);
        self.queue.submit(
            Access::Exclusive,
            "delete",
            async move { operations::delete(&path).await }.instrument(span),
        )
    }
}

impl FeedStore for FeedCacheStore {
    fn retrieve(&self) -> Completion<CachedFeed> {
        self.retrieve()
    }

    fn insert(&self, items: Vec<FeedItem>, timestamp: DateTime<Utc>) -> Completion<()> {
        self.insert(items, timestamp)
    }

    fn delete_cached_feed(&self) -> Completion<()> {
        self.delete_cached_feed()
    }
}
