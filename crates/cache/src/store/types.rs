//! Core store type

use crate::concurrent::SyncQueue;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Feed cache persisted to a single file.
///
/// Clones share the same queue, so they observe one ordering. Two stores
/// built separately on the same path are not ordered with respect to each other.
#[derive(Clone)]
pub struct FeedCacheStore {
    pub(super) path: Arc<PathBuf>,
    pub(super) queue: SyncQueue,
}

impl FeedCacheStore {
    /// Path of the cache file this store owns
    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for FeedCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedCacheStore")
            .field("path", &self.path)
            .field("queue", &self.queue)
            .finish()
    }
}
