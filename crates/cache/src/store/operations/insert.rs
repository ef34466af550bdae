//! Encode and atomically store a snapshot

use crate::serialization::encode;
use feedstore_core::{FeedSnapshot, Result, StoreError};
use feedstore_utils::write_atomic;
use std::path::Path;
use tracing::{debug, warn};

/// Replace whatever is at `path` with `snapshot`.
///
/// Goes through a same-directory temporary file and a rename, so on failure
/// the previous file, valid or not, is still in place.
pub(crate) async fn insert(path: &Path, snapshot: FeedSnapshot) -> Result<()> {
    let items = snapshot.len();
    let bytes = encode(snapshot, path)?;

    if let Err(e) = write_atomic(path, &bytes).await {
        warn!(error = %e, "failed to write cached feed");
        return Err(StoreError::write_failed(path, e.stage.as_str(), e.source));
    }

    debug!(items, bytes = bytes.len(), "cached feed inserted");
    Ok(())
}
