//! The `OutputOptions` record.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encoding::BundleEncoding;

/// Where and how a finished bundle is written.
///
/// Only `bundle_output` is required. The presence of `sourcemap_output` or
/// `manifest_output` switches the corresponding artifact on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Destination for the bundle code.
    #[serde(alias = "bundleOutput")]
    pub bundle_output: PathBuf,

    #[serde(default, alias = "bundleEncoding")]
    pub bundle_encoding: BundleEncoding,

    /// Selects the development variant of code and source map.
    #[serde(default)]
    pub dev: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, alias = "sourcemapOutput", skip_serializing_if = "Option::is_none")]
    pub sourcemap_output: Option<PathBuf>,

    /// Root that absolute source map paths are rewritten against.
    #[serde(default, alias = "sourcemapSourcesRoot", skip_serializing_if = "Option::is_none")]
    pub sourcemap_sources_root: Option<PathBuf>,

    #[serde(default, alias = "manifestOutput", skip_serializing_if = "Option::is_none")]
    pub manifest_output: Option<PathBuf>,
}

impl OutputOptions {
    pub fn new(bundle_output: impl Into<PathBuf>) -> Self {
        Self {
            bundle_output: bundle_output.into(),
            bundle_encoding: BundleEncoding::default(),
            dev: false,
            platform: None,
            sourcemap_output: None,
            sourcemap_sources_root: None,
            manifest_output: None,
        }
    }

    pub fn bundle_encoding(mut self, encoding: BundleEncoding) -> Self {
        self.bundle_encoding = encoding;
        self
    }

    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn sourcemap_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.sourcemap_output = Some(path.into());
        self
    }

    pub fn sourcemap_sources_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sourcemap_sources_root = Some(root.into());
        self
    }

    pub fn manifest_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_output = Some(path.into());
        self
    }

    /// Path of the metadata descriptor written next to the bundle.
    ///
    /// `.meta` is appended to the full file name, so `app.js` becomes
    /// `app.js.meta`.
    pub fn meta_output(&self) -> PathBuf {
        let mut path = self.bundle_output.clone().into_os_string();
        path.push(".meta");
        PathBuf::from(path)
    }

    pub fn sources_root(&self) -> Option<&Path> {
        self.sourcemap_sources_root.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_output_appends_suffix() {
        let options = OutputOptions::new("out/app.bundle");
        assert_eq!(options.meta_output(), PathBuf::from("out/app.bundle.meta"));
    }

    #[test]
    fn test_defaults() {
        let options = OutputOptions::new("out/app.js");
        assert_eq!(options.bundle_encoding, BundleEncoding::Utf8);
        assert!(!options.dev);
        assert!(options.sourcemap_output.is_none());
        assert!(options.manifest_output.is_none());
        assert!(options.sources_root().is_none());
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let options: OutputOptions = serde_json::from_value(serde_json::json!({
            "bundleOutput": "out/app.js",
            "bundleEncoding": "utf8",
            "sourcemapOutput": "out/app.js.map",
            "sourcemapSourcesRoot": "/src",
            "manifestOutput": "out/manifest.json"
        }))
        .unwrap();

        assert_eq!(options.bundle_output, PathBuf::from("out/app.js"));
        assert_eq!(options.sourcemap_output, Some(PathBuf::from("out/app.js.map")));
        assert_eq!(options.sources_root(), Some(Path::new("/src")));
        assert_eq!(options.manifest_output, Some(PathBuf::from("out/manifest.json")));
    }
}
