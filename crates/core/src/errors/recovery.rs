//! Failure classification helpers

use super::types::StoreError;
use std::io::ErrorKind as IoErrorKind;

impl StoreError {
    /// Check if this error indicates the stored snapshot is corrupt or foreign
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::NotDecodable { .. })
    }

    /// Check if re-invoking the same operation may succeed without intervention
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Interrupted { .. } => true,
            Self::ReadFailed { source, .. }
            | Self::WriteFailed { source, .. }
            | Self::DeleteFailed { source, .. } => matches!(
                source.kind(),
                IoErrorKind::Interrupted | IoErrorKind::WouldBlock | IoErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}
