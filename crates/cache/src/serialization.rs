//! On-disk encoding of the feed snapshot
//!
//! The file holds one JSON object:
//!
//! ```json
//! {"items": [{"id": "...", "description": null, "location": null, "url": "..."}],
//!  "timestamp": "2024-01-01T00:00:00.000000001Z"}
//! ```
//!
//! Unknown fields are rejected at every level, so content written by some
//! other program fails to decode instead of producing a partial snapshot.

use chrono::{DateTime, Utc};
use feedstore_core::{FeedItem, FeedSnapshot, Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredFeed {
    items: Vec<StoredItem>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: Url,
}

impl From<FeedItem> for StoredItem {
    fn from(item: FeedItem) -> Self {
        let (id, description, location, url) = item.into_parts();
        Self {
            id,
            description,
            location,
            url,
        }
    }
}

impl From<StoredItem> for FeedItem {
    fn from(item: StoredItem) -> Self {
        FeedItem::from_parts(item.id, item.description, item.location, item.url)
    }
}

/// Encode a snapshot for storage at `path`
pub fn encode(snapshot: FeedSnapshot, path: &Path) -> Result<Vec<u8>> {
    let stored = StoredFeed {
        items: snapshot.items.into_iter().map(StoredItem::from).collect(),
        timestamp: snapshot.timestamp,
    };
    serde_json::to_vec(&stored).map_err(|e| StoreError::not_encodable(path, e))
}

/// Decode the bytes read from `path` into a snapshot
pub fn decode(bytes: &[u8], path: &Path) -> Result<FeedSnapshot> {
    let stored: StoredFeed =
        serde_json::from_slice(bytes).map_err(|e| StoreError::not_decodable(path, e))?;
    Ok(FeedSnapshot {
        items: stored.items.into_iter().map(FeedItem::from).collect(),
        timestamp: stored.timestamp,
    })
}
