//! Seams to the bundling engine.
//!
//! The writer never builds anything itself. A [`Bundler`] produces a
//! [`Bundle`], and the bundle exposes the code, source map and manifest the
//! writer turns into files.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::manifest::BundleManifest;
use crate::sourcemap::SourceMap;

/// Error returned by a [`Bundler`] that failed to build.
pub type BuildError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Source map as handed out by a bundle.
///
/// Some bundles cache the serialized map, others keep the structured form.
/// The assembler normalizes both to [`SourceMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum SourceMapSource {
    Text(String),
    Structured(SourceMap),
}

impl From<String> for SourceMapSource {
    fn from(text: String) -> Self {
        SourceMapSource::Text(text)
    }
}

impl From<SourceMap> for SourceMapSource {
    fn from(map: SourceMap) -> Self {
        SourceMapSource::Structured(map)
    }
}

/// A fully resolved, order-stable set of transformed modules.
///
/// Bundles are immutable once built; every accessor must return the same
/// value for the same arguments.
pub trait Bundle: Send + Sync {
    /// Bundle code, in the development or production variant.
    fn source(&self, dev: bool) -> String;

    /// Source map matching [`source`](Self::source) for the same `dev` flag.
    fn source_map(&self, dev: bool) -> SourceMapSource;

    fn manifest(&self) -> BundleManifest;
}

/// Options forwarded to the bundler for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub entry_file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub dev: bool,
    #[serde(default)]
    pub minify: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_url: Option<String>,
    /// Namespace module ids so they cannot collide with another bundle's.
    #[serde(default, rename = "isolateModuleIDs")]
    pub isolate_module_ids: bool,
}

impl RequestOptions {
    pub fn new(entry_file: impl Into<PathBuf>) -> Self {
        Self {
            entry_file: entry_file.into(),
            ..Self::default()
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn source_map_url(mut self, url: impl Into<String>) -> Self {
        self.source_map_url = Some(url.into());
        self
    }
}

/// The engine that builds bundles.
#[async_trait]
pub trait Bundler: Send + Sync {
    type Output: Bundle;

    async fn build_bundle(&self, request: RequestOptions) -> Result<Self::Output, BuildError>;
}
