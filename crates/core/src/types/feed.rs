//! Feed records and the snapshot that groups them

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

/// A single feed record.
///
/// Immutable once built; the store round-trips it without inspecting any field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: Url,
}

impl FeedItem {
    /// Create a record with no description or location
    #[must_use]
    pub fn new(id: Uuid, url: Url) -> Self {
        Self {
            id,
            description: None,
            location: None,
            url,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build a record from all four fields at once
    #[must_use]
    pub fn from_parts(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Split the record into `(id, description, location, url)`
    #[must_use]
    pub fn into_parts(self) -> (Uuid, Option<String>, Option<String>, Url) {
        (self.id, self.description, self.location, self.url)
    }
}

/// The single persisted entity: an ordered list of records and the moment they were inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub items: Vec<FeedItem>,
    pub timestamp: DateTime<Utc>,
}

impl FeedSnapshot {
    #[must_use]
    pub fn new(items: Vec<FeedItem>, timestamp: DateTime<Utc>) -> Self {
        Self { items, timestamp }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A snapshot with no records is still a snapshot; retrieve reports it as found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
