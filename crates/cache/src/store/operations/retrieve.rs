//! Read and decode the stored snapshot

use crate::serialization::decode;
use feedstore_core::{CachedFeed, Result, StoreError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Read the snapshot at `path`.
///
/// An absent file is [`CachedFeed::Empty`]. Undecodable content is reported
/// and left exactly as found.
pub(crate) async fn retrieve(path: &Path) -> Result<CachedFeed> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no cached feed");
            return Ok(CachedFeed::Empty);
        }
        Err(e) => {
            warn!(error = %e, "failed to read cached feed");
            return Err(StoreError::read_failed(path, "read", e));
        }
    };

    match decode(&bytes, path) {
        Ok(snapshot) => {
            debug!(items = snapshot.len(), bytes = bytes.len(), "cached feed retrieved");
            Ok(CachedFeed::Found(snapshot))
        }
        Err(e) => {
            warn!(error = %e, bytes = bytes.len(), "cached feed is not decodable");
            Err(e)
        }
    }
}
