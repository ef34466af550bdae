//! Atomic file replacement so readers never observe a torn cache file

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Stage of [`write_atomic`] that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    CreateTemp,
    Write,
    Sync,
    Rename,
}

impl WriteStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTemp => "create temporary file for",
            Self::Write => "write temporary file for",
            Self::Sync => "sync temporary file for",
            Self::Rename => "rename temporary file over",
        }
    }
}

/// Error from [`write_atomic`], carrying the failed stage
#[derive(Debug, thiserror::Error)]
#[error("failed to {} target: {source}", .stage.as_str())]
pub struct AtomicWriteError {
    pub stage: WriteStage,
    #[source]
    pub source: io::Error,
}

/// Temporary sibling path used while replacing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    parent.join(format!(".{stem}.{}.tmp", Uuid::new_v4()))
}

/// Replace the contents of `path` atomically.
///
/// The content goes to a temporary file in the same directory, is synced,
/// then renamed over `path`. Missing parent directories are not created, so
/// a path under a nonexistent directory fails at [`WriteStage::CreateTemp`]
/// and leaves everything untouched. On any failure the temporary file is removed.
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<(), AtomicWriteError> {
    let temp_path = temp_path_for(path);

    let result = write_and_sync(&temp_path, content).await;
    if let Err(e) = result {
        if e.stage != WriteStage::CreateTemp {
            let _ = fs::remove_file(&temp_path).await;
        }
        return Err(e);
    }

    if let Err(source) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(AtomicWriteError {
            stage: WriteStage::Rename,
            source,
        });
    }

    Ok(())
}

async fn write_and_sync(temp_path: &Path, content: &[u8]) -> Result<(), AtomicWriteError> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(temp_path)
        .await
        .map_err(|source| AtomicWriteError {
            stage: WriteStage::CreateTemp,
            source,
        })?;

    file.write_all(content)
        .await
        .map_err(|source| AtomicWriteError {
            stage: WriteStage::Write,
            source,
        })?;

    file.sync_all().await.map_err(|source| AtomicWriteError {
        stage: WriteStage::Sync,
        source,
    })?;

    Ok(())
}
