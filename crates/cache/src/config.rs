//! Store configuration

use feedstore_core::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one configuration value a store recognizes: where its cache file lives.
///
/// Deserializable so a host application can embed it in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Absolute path of the cache file
    pub store_path: PathBuf,
}

impl StoreConfig {
    #[must_use]
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Check the path is absolute and names a file.
    ///
    /// Existence and writability are not checked here; those surface as
    /// operation failures.
    pub fn validate(&self) -> Result<()> {
        if !self.store_path.is_absolute() {
            return Err(StoreError::configuration(format!(
                "store path '{}' must be absolute",
                self.store_path.display()
            )));
        }
        if self.store_path.file_name().is_none() {
            return Err(StoreError::configuration(format!(
                "store path '{}' does not name a file",
                self.store_path.display()
            )));
        }
        Ok(())
    }
}
