//! Disk-persisted cache for a single feed snapshot
//!
//! This crate provides one cache slot backed by one file:
//! - Retrieve, insert (overwrite-all) and delete, each answered through a [`Completion`]
//! - Reader/writer ordering: retrieves share, mutations run alone, admission is FIFO
//! - Atomic replacement so a reader never sees a half-written snapshot
//! - Every failure classified as a [`StoreError`] and delivered to the caller

pub mod concurrent;
pub mod config;
pub mod store;
pub mod serialization;
pub mod traits;

pub use concurrent::Completion;
pub use config::StoreConfig;
pub use store::FeedCacheStore;
pub use traits::FeedStore;

pub use feedstore_core::{CachedFeed, ErrorKind, FeedItem, FeedSnapshot, Result, StoreError};
