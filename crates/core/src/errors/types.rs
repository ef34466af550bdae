//! Store error type definitions

use std::path::PathBuf;

/// Result type alias for feed store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type delivered through the completion of every store operation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored bytes do not parse as a feed snapshot
    #[error("cached feed at '{}' could not be decoded: {source}", .path.display())]
    NotDecodable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot could not be serialized
    #[error("feed snapshot for '{}' could not be encoded: {source}", .path.display())]
    NotEncodable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the cache file failed for a reason other than it being absent
    #[error("failed to {operation} cached feed at '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Writing the cache file could not complete
    #[error("failed to {operation} cached feed at '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Removing the cache file could not complete
    #[error("failed to {operation} cached feed at '{}': {source}", .path.display())]
    DeleteFailed {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The worker running the operation stopped before producing a result
    #[error("{operation} on '{}' was interrupted before completing", .path.display())]
    Interrupted {
        path: PathBuf,
        operation: &'static str,
    },

    /// No async runtime is usable from the calling context
    #[error("async runtime unavailable: {message}")]
    Runtime { message: String },

    /// The store configuration is invalid
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// Discriminant of a [`StoreError`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotDecodable,
    NotEncodable,
    ReadFailed,
    WriteFailed,
    DeleteFailed,
    Interrupted,
    Runtime,
    Configuration,
}

impl StoreError {
    /// The failure class of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotDecodable { .. } => ErrorKind::NotDecodable,
            Self::NotEncodable { .. } => ErrorKind::NotEncodable,
            Self::ReadFailed { .. } => ErrorKind::ReadFailed,
            Self::WriteFailed { .. } => ErrorKind::WriteFailed,
            Self::DeleteFailed { .. } => ErrorKind::DeleteFailed,
            Self::Interrupted { .. } => ErrorKind::Interrupted,
            Self::Runtime { .. } => ErrorKind::Runtime,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// The cache file path the failing operation targeted, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotDecodable { path, .. }
            | Self::NotEncodable { path, .. }
            | Self::ReadFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::DeleteFailed { path, .. }
            | Self::Interrupted { path, .. } => Some(path.as_path()),
            Self::Runtime { .. } | Self::Configuration { .. } => None,
        }
    }
}
