//! Retrieval outcome

use super::feed::FeedSnapshot;
use chrono::{DateTime, Utc};

/// What a successful retrieve found at the store path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedFeed {
    /// No snapshot file exists
    Empty,
    /// A snapshot was read and decoded
    Found(FeedSnapshot),
}

impl CachedFeed {
    /// True only when no snapshot exists.
    ///
    /// A snapshot holding zero items is still `Found` and not empty here.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&FeedSnapshot> {
        match self {
            Self::Empty => None,
            Self::Found(snapshot) => Some(snapshot),
        }
    }

    #[must_use]
    pub fn into_snapshot(self) -> Option<FeedSnapshot> {
        match self {
            Self::Empty => None,
            Self::Found(snapshot) => Some(snapshot),
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.snapshot().map(|snapshot| snapshot.timestamp)
    }
}

impl From<FeedSnapshot> for CachedFeed {
    fn from(snapshot: FeedSnapshot) -> Self {
        Self::Found(snapshot)
    }
}

impl From<Option<FeedSnapshot>> for CachedFeed {
    fn from(snapshot: Option<FeedSnapshot>) -> Self {
        snapshot.map_or(Self::Empty, Self::Found)
    }
}
