//! Shared fixtures and behaviour assertions for feed store tests
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use feedstore_cache::{CachedFeed, FeedCacheStore, FeedItem, FeedStore, StoreError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;
use uuid::Uuid;

/// An isolated directory holding one store file, removed on drop
pub struct TestStore {
    temp_dir: TempDir,
    store_path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        feedstore_utils::tracing::init_for_tests();
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("feed.store");
        Self {
            temp_dir,
            store_path,
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// A store on the fixture's file
    pub fn store(&self) -> FeedCacheStore {
        FeedCacheStore::new(&self.store_path).unwrap()
    }

    /// A store whose path sits under a directory that does not exist
    pub fn unwritable_store(&self) -> FeedCacheStore {
        FeedCacheStore::new(self.dir().join("missing").join("feed.store")).unwrap()
    }

    /// A store whose path is an existing directory
    pub fn directory_store(&self) -> FeedCacheStore {
        let path = self.dir().join("occupied");
        std::fs::create_dir_all(path.join("contents")).unwrap();
        FeedCacheStore::new(path).unwrap()
    }

    pub fn write_raw(&self, bytes: &[u8]) {
        std::fs::write(&self.store_path, bytes).unwrap();
    }

    pub fn read_raw(&self) -> Vec<u8> {
        std::fs::read(&self.store_path).unwrap()
    }
}

pub fn unique_item() -> FeedItem {
    let id = Uuid::new_v4();
    FeedItem::new(id, Url::parse(&format!("https://any-url.com/{id}")).unwrap())
        .with_description("any description")
        .with_location("any location")
}

pub fn unique_feed() -> Vec<FeedItem> {
    vec![unique_item(), unique_item()]
}

/// A fixed point in time with sub-second precision
pub fn timestamp(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_650_000_000, 987_654_321).unwrap() + Duration::seconds(offset_secs)
}

pub async fn insert(store: &dyn FeedStore, items: Vec<FeedItem>, at: DateTime<Utc>) -> Option<StoreError> {
    store.insert(items, at).await.err()
}

pub async fn delete(store: &dyn FeedStore) -> Option<StoreError> {
    store.delete_cached_feed().await.err()
}

pub async fn expect_found(store: &dyn FeedStore, items: &[FeedItem], at: DateTime<Utc>) {
    match store.retrieve().await {
        Ok(CachedFeed::Found(snapshot)) => {
            assert_eq!(snapshot.items, items);
            assert_eq!(snapshot.timestamp, at);
        }
        other => panic!("expected found feed, got {other:?}"),
    }
}

pub async fn expect_empty(store: &dyn FeedStore) {
    match store.retrieve().await {
        Ok(CachedFeed::Empty) => {}
        other => panic!("expected empty cache, got {other:?}"),
    }
}

pub async fn expect_empty_twice(store: &dyn FeedStore) {
    expect_empty(store).await;
    expect_empty(store).await;
}

pub async fn expect_failure(store: &dyn FeedStore) -> StoreError {
    match store.retrieve().await {
        Err(error) => error,
        Ok(found) => panic!("expected retrieval failure, got {found:?}"),
    }
}
