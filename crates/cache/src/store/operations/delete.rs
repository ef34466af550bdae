//! Remove the stored snapshot

use feedstore_core::{Result, StoreError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Remove the file at `path`; an absent file is already deleted
pub(crate) async fn delete(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!("cached feed deleted");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no cached feed to delete");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "failed to delete cached feed");
            Err(StoreError::delete_failed(path, "remove", e))
        }
    }
}
