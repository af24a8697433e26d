//! The persistence seam used by the save coordinator.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Result type for write operations
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors that can occur while persisting one artifact
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Destination path is unusable (e.g. contains a NUL byte)
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// Underlying I/O failure
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blocking write task panicked or was cancelled
    #[error("Write task failed: {0}")]
    Task(String),
}

/// Scoped write of one artifact to one path.
///
/// Implementations must either leave the previous file (if any) in place or
/// replace it with the complete new contents.
#[async_trait]
pub trait FileWriter: Send + Sync + std::fmt::Debug {
    async fn write_file(&self, path: &Path, contents: &[u8]) -> WriteResult<()>;
}

pub(crate) fn validate_path(path: &Path) -> WriteResult<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(WriteError::InvalidPath("path is empty".to_string()));
    }
    if text.contains('\0') {
        return Err(WriteError::InvalidPath(format!(
            "path contains null byte: {}",
            text.escape_debug()
        )));
    }
    Ok(())
}
