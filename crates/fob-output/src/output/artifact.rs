//! Declarative description of the artifacts one save produces.
//!
//! [`plan_artifacts`] is a pure function of the options. The coordinator
//! renders and writes whatever the plan contains, so required and optional
//! artifacts go through the same dispatch path.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fob_output_config::OutputOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Bundle,
    Metadata,
    SourceMap,
    Manifest,
}

impl ArtifactKind {
    /// Bundle code and metadata are written on every save.
    pub fn is_required(&self) -> bool {
        matches!(self, ArtifactKind::Bundle | ArtifactKind::Metadata)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Bundle => "bundle",
            ArtifactKind::Metadata => "metadata",
            ArtifactKind::SourceMap => "sourcemap",
            ArtifactKind::Manifest => "manifest",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One artifact to produce and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub destination: PathBuf,
}

impl ArtifactSpec {
    fn new(kind: ArtifactKind, destination: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            destination: destination.into(),
        }
    }
}

/// Artifacts required by `options`, in dispatch order.
pub fn plan_artifacts(options: &OutputOptions) -> Vec<ArtifactSpec> {
    let mut specs = vec![
        ArtifactSpec::new(ArtifactKind::Bundle, &options.bundle_output),
        ArtifactSpec::new(ArtifactKind::Metadata, options.meta_output()),
    ];

    if let Some(path) = &options.sourcemap_output {
        specs.push(ArtifactSpec::new(ArtifactKind::SourceMap, path));
    }
    if let Some(path) = &options.manifest_output {
        specs.push(ArtifactSpec::new(ArtifactKind::Manifest, path));
    }

    specs
}
