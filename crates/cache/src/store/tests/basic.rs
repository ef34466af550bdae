//! Basic store operation tests

use crate::store::FeedCacheStore;
use crate::traits::FeedStore;
use chrono::{TimeZone, Utc};
use feedstore_core::{CachedFeed, ErrorKind, FeedItem, Result};
use std::sync::Arc;
use tempfile::TempDir;
use url::Url;
use uuid::Uuid;

fn item(name: &str) -> FeedItem {
    FeedItem::new(
        Uuid::new_v4(),
        Url::parse(&format!("https://example.com/{name}.png")).unwrap(),
    )
    .with_description(format!("{name} description"))
}

#[tokio::test]
async fn test_basic_operations() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FeedCacheStore::new(temp_dir.path().join("feed.store"))?;
    let timestamp = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
    let items = vec![item("a"), item("b")];

    assert_eq!(store.retrieve().await?, CachedFeed::Empty);

    store.insert(items.clone(), timestamp).await?;
    let found = store.retrieve().await?;
    assert_eq!(found.timestamp(), Some(timestamp));
    assert_eq!(found.into_snapshot().map(|snapshot| snapshot.items), Some(items));

    store.delete_cached_feed().await?;
    assert_eq!(store.retrieve().await?, CachedFeed::Empty);

    Ok(())
}

#[tokio::test]
async fn test_insert_creates_only_the_store_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FeedCacheStore::new(temp_dir.path().join("feed.store"))?;

    store.insert(vec![item("a")], Utc::now()).await?;

    let names: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["feed.store".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_empty_feed_is_found_not_empty() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FeedCacheStore::new(temp_dir.path().join("feed.store"))?;
    let timestamp = Utc::now();

    store.insert(Vec::new(), timestamp).await?;

    match store.retrieve().await? {
        CachedFeed::Found(snapshot) => {
            assert!(snapshot.is_empty());
            assert_eq!(snapshot.timestamp, timestamp);
        }
        CachedFeed::Empty => panic!("an inserted empty feed should be found"),
    }
    Ok(())
}

#[tokio::test]
async fn test_clones_share_one_store() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FeedCacheStore::new(temp_dir.path().join("feed.store"))?;
    let clone = store.clone();
    let items = vec![item("shared")];

    let insert = clone.insert(items.clone(), Utc::now());
    let retrieve = store.retrieve();
    insert.await?;

    let snapshot = retrieve.await?.into_snapshot().expect("insert admitted first");
    assert_eq!(snapshot.items, items);
    assert_eq!(clone.store_path(), store.store_path());
    Ok(())
}

#[tokio::test]
async fn test_usable_as_trait_object() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn FeedStore> =
        Arc::new(FeedCacheStore::new(temp_dir.path().join("feed.store"))?);

    store.insert(vec![item("dyn")], Utc::now()).await?;
    assert!(!store.retrieve().await?.is_empty());
    store.delete_cached_feed().await?;
    assert!(store.retrieve().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_relative_path_is_rejected() {
    let error = FeedCacheStore::new("relative/feed.store").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_on_complete_delivers_each_result() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FeedCacheStore::new(temp_dir.path().join("feed.store"))?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let insert_tx = tx.clone();
    store
        .insert(vec![item("callback")], Utc::now())
        .on_complete(move |result| {
            let _ = insert_tx.send(("insert", result.is_ok()));
        });
    store.retrieve().on_complete(move |result| {
        let _ = tx.send(("retrieve", matches!(result, Ok(CachedFeed::Found(_)))));
    });

    let mut delivered = Vec::new();
    while let Some(event) = rx.recv().await {
        delivered.push(event);
    }
    delivered.sort_unstable();
    assert_eq!(delivered, vec![("insert", true), ("retrieve", true)]);
    Ok(())
}
