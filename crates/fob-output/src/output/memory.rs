//! In-memory writer for dry runs and tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use path_clean::PathClean;
use rustc_hash::FxHashMap;

use super::writer::{FileWriter, WriteResult, validate_path};

/// Collects written artifacts in memory instead of on disk.
///
/// Clones share the same storage, so a clone handed to a save can be
/// inspected afterwards through the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileWriter {
    files: Arc<RwLock<FxHashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.read().get(&path.as_ref().clean()).cloned()
    }

    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read(path).and_then(|bytes| String::from_utf8(bytes).ok())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.read().contains_key(&path.as_ref().clean())
    }

    /// Written paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.files.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

#[async_trait]
impl FileWriter for MemoryFileWriter {
    async fn write_file(&self, path: &Path, contents: &[u8]) -> WriteResult<()> {
        validate_path(path)?;
        self.files.write().insert(path.clean(), contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_writer_normalizes_paths() {
        let writer = MemoryFileWriter::new();
        writer.write_file(Path::new("out/./app.js"), b"code").await.unwrap();

        assert!(writer.contains("out/app.js"));
        assert_eq!(writer.read_to_string("out/app.js").as_deref(), Some("code"));
        assert_eq!(writer.paths(), vec![PathBuf::from("out/app.js")]);
    }

    #[tokio::test]
    async fn test_memory_writer_clones_share_storage() {
        let writer = MemoryFileWriter::new();
        let clone = writer.clone();
        clone.write_file(Path::new("a.js"), b"a").await.unwrap();

        assert_eq!(writer.len(), 1);
        assert!(!writer.is_empty());
    }
}
