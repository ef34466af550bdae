//! Builder methods for creating errors with context

use super::types::StoreError;
use std::path::PathBuf;

impl StoreError {
    /// Create a decode error for the snapshot stored at `path`
    #[must_use]
    pub fn not_decodable(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::NotDecodable {
            path: path.into(),
            source,
        }
    }

    /// Create an encode error for the snapshot destined for `path`
    #[must_use]
    pub fn not_encodable(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::NotEncodable {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn read_failed(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            operation,
            source,
        }
    }

    #[must_use]
    pub fn write_failed(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            operation,
            source,
        }
    }

    #[must_use]
    pub fn delete_failed(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        StoreError::DeleteFailed {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Create an error for an operation whose worker went away without answering
    #[must_use]
    pub fn interrupted(path: impl Into<PathBuf>, operation: &'static str) -> Self {
        StoreError::Interrupted {
            path: path.into(),
            operation,
        }
    }

    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        StoreError::Runtime {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        StoreError::Configuration {
            message: message.into(),
        }
    }
}
