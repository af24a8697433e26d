//! Filesystem writer with per-file atomic replacement.
//!
//! Each write goes to a uniquely named temp file beside the destination and
//! is renamed over it once complete. `rename()` is atomic on the same
//! filesystem, so readers see either the old file or the whole new one.
//! There is no rollback across files: a save that fails part way leaves
//! the artifacts that were already written.

// NativeFileWriter wraps std::fs
#![allow(clippy::disallowed_methods)]

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use path_clean::PathClean;
use tokio::task;

use super::writer::{FileWriter, WriteError, WriteResult, validate_path};

/// Writes artifacts to the native filesystem.
///
/// Blocking I/O runs on tokio's blocking pool via `spawn_blocking`.
#[derive(Debug, Clone, Default)]
pub struct NativeFileWriter {
    /// Base for relative destinations; the process cwd when `None`.
    cwd: Option<PathBuf>,
}

impl NativeFileWriter {
    pub fn new() -> Self {
        Self { cwd: None }
    }

    /// Resolve relative destinations against `cwd`.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.cwd {
            Some(cwd) if !path.is_absolute() => cwd.join(path).clean(),
            _ => path.clean(),
        }
    }
}

#[async_trait]
impl FileWriter for NativeFileWriter {
    async fn write_file(&self, path: &Path, contents: &[u8]) -> WriteResult<()> {
        validate_path(path)?;
        let target = self.resolve_path(path);
        let contents = contents.to_vec();

        task::spawn_blocking(move || write_atomic(&target, &contents))
            .await
            .map_err(|e| WriteError::Task(format!("Task join error: {}", e)))?
    }
}

fn write_atomic(target: &Path, contents: &[u8]) -> WriteResult<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(target)?;

    if let Err(source) = fs::write(&temp_path, contents) {
        cleanup_temp_file(&temp_path);
        return Err(WriteError::Io {
            path: temp_path,
            source,
        });
    }

    fs::rename(&temp_path, target).map_err(|source| {
        cleanup_temp_file(&temp_path);
        WriteError::Io {
            path: target.to_path_buf(),
            source,
        }
    })
}

/// `dir/.name.<uuid>.tmp`, unique per write so concurrent artifacts that
/// share a file stem never collide.
fn temp_path_for(target: &Path) -> WriteResult<PathBuf> {
    let file_name = target
        .file_name()
        .ok_or_else(|| {
            WriteError::InvalidPath(format!("'{}' has no file name", target.display()))
        })?
        .to_string_lossy();

    Ok(target.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4().simple())))
}

/// Best-effort; we are already returning an error.
fn cleanup_temp_file(temp_path: &Path) {
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(temp_path) {
            tracing::warn!(
                target: "fob_output",
                path = %temp_path.display(),
                error = %e,
                "failed to clean up temporary file"
            );
        }
    }
}
