//! Shared test utilities for fob-output tests

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use fob_output::{
    BuildError, Bundle, BundleManifest, Bundler, FileWriter, MemoryFileWriter, RequestOptions,
    SaveEvent, SaveLogger, SourceMapSource, WriteError, WriteResult,
};

pub const PROD_CODE: &str = "__d(function(){var a=require(1);},0);";
pub const DEV_CODE: &str = "__d(function() {\n  var a = require(1);\n}, 0);";

/// Bundle with fixed code and a map whose sources live under `/src`.
#[derive(Debug, Clone)]
pub struct FixtureBundle {
    pub map_as_text: bool,
    pub sources: Vec<Option<String>>,
}

impl FixtureBundle {
    pub fn new() -> Self {
        Self {
            map_as_text: true,
            sources: vec![Some("/src/a.js".to_string())],
        }
    }

    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| Some(s.to_string())).collect();
        self
    }

    /// Append a `null` entry to `sources`.
    pub fn with_unnamed_source(mut self) -> Self {
        self.sources.push(None);
        self
    }

    pub fn structured_map(mut self) -> Self {
        self.map_as_text = false;
        self
    }
}

impl Bundle for FixtureBundle {
    fn source(&self, dev: bool) -> String {
        if dev { DEV_CODE.to_string() } else { PROD_CODE.to_string() }
    }

    fn source_map(&self, _dev: bool) -> SourceMapSource {
        let value = serde_json::json!({
            "version": 3,
            "file": "app.js",
            "sources": self.sources,
            "names": [],
            "mappings": "AAAA"
        });
        if self.map_as_text {
            SourceMapSource::Text(value.to_string())
        } else {
            SourceMapSource::Structured(serde_json::from_value(value).expect("valid map"))
        }
    }

    fn manifest(&self) -> BundleManifest {
        BundleManifest::new()
            .with_module("/src/index.js", 0, ["/src/a.js"])
            .with_module("/src/a.js", 1, Vec::<String>::new())
    }
}

/// Bundle whose source map text is not JSON.
pub struct BrokenMapBundle;

impl Bundle for BrokenMapBundle {
    fn source(&self, _dev: bool) -> String {
        PROD_CODE.to_string()
    }

    fn source_map(&self, _dev: bool) -> SourceMapSource {
        SourceMapSource::Text("{\"version\": 3, \"sources\": [".to_string())
    }

    fn manifest(&self) -> BundleManifest {
        BundleManifest::new()
    }
}

/// Bundler that records requests and either succeeds or fails.
#[derive(Default)]
pub struct FixtureBundler {
    pub fail: bool,
    pub requests: Mutex<Vec<RequestOptions>>,
}

impl FixtureBundler {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Bundler for FixtureBundler {
    type Output = FixtureBundle;

    async fn build_bundle(&self, request: RequestOptions) -> Result<FixtureBundle, BuildError> {
        self.requests.lock().push(request.clone());
        if self.fail {
            return Err(anyhow::anyhow!(
                "cannot resolve entry file '{}'",
                request.entry_file.display()
            )
            .into());
        }
        Ok(FixtureBundle::new())
    }
}

/// Delegates to `inner` but fails every path ending with `suffix`.
#[derive(Debug)]
pub struct FailingWriter<W> {
    pub inner: W,
    pub suffix: String,
}

impl<W> FailingWriter<W> {
    pub fn new(inner: W, suffix: &str) -> Self {
        Self {
            inner,
            suffix: suffix.to_string(),
        }
    }
}

#[async_trait]
impl<W: FileWriter> FileWriter for FailingWriter<W> {
    async fn write_file(&self, path: &Path, contents: &[u8]) -> WriteResult<()> {
        if path.to_string_lossy().ends_with(&self.suffix) {
            return Err(WriteError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("No space left on device"),
            });
        }
        self.inner.write_file(path, contents).await
    }
}

/// Memory writer that also records every dispatched path.
#[derive(Debug, Default)]
pub struct CountingWriter {
    pub inner: MemoryFileWriter,
    pub dispatched: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl FileWriter for CountingWriter {
    async fn write_file(&self, path: &Path, contents: &[u8]) -> WriteResult<()> {
        self.dispatched.lock().push(path.to_path_buf());
        self.inner.write_file(path, contents).await
    }
}

/// Records the display form of every event.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl SaveLogger for RecordingLogger {
    fn log(&self, event: &SaveEvent<'_>) {
        self.messages.lock().push(event.to_string());
    }
}
