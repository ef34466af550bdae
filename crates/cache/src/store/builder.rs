//! Store construction

use crate::concurrent::SyncQueue;
use crate::config::StoreConfig;
use feedstore_core::{Result, StoreError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

use super::types::FeedCacheStore;

impl FeedCacheStore {
    /// Create a store for the cache file at `store_path` on the current tokio runtime
    pub fn new(store_path: impl Into<PathBuf>) -> Result<Self> {
        Self::from_config(StoreConfig::new(store_path))
    }

    /// Create a store from `config` on the current tokio runtime
    pub fn from_config(config: StoreConfig) -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| {
            StoreError::runtime(format!("feed store must be created inside a tokio runtime: {e}"))
        })?;
        Self::with_handle(config, handle)
    }

    /// Create a store whose operations run on `handle`.
    ///
    /// Usable from threads outside the runtime; results can then be taken with
    /// [`Completion::wait`](crate::Completion::wait).
    pub fn with_handle(config: StoreConfig, handle: Handle) -> Result<Self> {
        config.validate()?;

        let path = Arc::new(config.store_path);
        let queue = SyncQueue::spawn(Arc::clone(&path), handle);
        debug!(path = %path.display(), "feed store created");

        Ok(Self { path, queue })
    }
}
