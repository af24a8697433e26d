#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fob-output
//!
//! Final stage of a fob build: turns a finished bundle into files on disk.
//!
//! A save writes up to four artifacts concurrently:
//!
//! - the bundle code at `bundle_output`, encoded per `bundle_encoding`
//! - a binary metadata descriptor at `bundle_output + ".meta"`
//! - the source map at `sourcemap_output`, with sources made relative to
//!   `sourcemap_sources_root` when one is configured
//! - the module manifest at `manifest_output`
//!
//! ## Quick Start
//!
//! ```no_run
//! use fob_output::{NativeFileWriter, OutputOptions, TracingLogger};
//! # use fob_output::Bundle;
//!
//! # async fn run(bundle: &dyn Bundle) -> fob_output::Result<()> {
//! let options = OutputOptions::new("dist/app.js")
//!     .sourcemap_output("dist/app.js.map")
//!     .sourcemap_sources_root("/home/me/project");
//!
//! let report = fob_output::save(bundle, &options, &NativeFileWriter::new(), &TracingLogger).await?;
//! for artifact in &report.artifacts {
//!     println!("{} -> {}", artifact.kind, artifact.path.display());
//! }
//! # Ok(()) }
//! ```

use std::path::PathBuf;

pub mod assemble;
pub mod bundle;
pub mod events;
pub mod format;
pub mod manifest;
pub mod meta;
pub mod output;
pub mod sourcemap;

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use logging::{SaveVerbosity, init_logging};

pub use assemble::{CodeWithMap, assemble};
pub use bundle::{BuildError, Bundle, Bundler, RequestOptions, SourceMapSource};
pub use events::{NoopLogger, SaveEvent, SaveLogger, TracingLogger};
pub use format::{FORMAT_NAME, build, build_and_save};
pub use manifest::{BundleManifest, ManifestModule, build_manifest};
pub use meta::BundleMetadata;
pub use output::artifact::{ArtifactKind, ArtifactSpec, plan_artifacts};
pub use output::memory::MemoryFileWriter;
#[cfg(not(target_family = "wasm"))]
pub use output::native::NativeFileWriter;
pub use output::save::{SaveReport, WrittenArtifact, save};
pub use output::writer::{FileWriter, WriteError, WriteResult};
pub use sourcemap::{SourceMap, SourceMapSection, relativize};

pub use fob_output_config::{BundleEncoding, ConfigError, OutputOptions};

/// Error types for fob-output operations.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// The options failed validation; nothing was built or written.
    #[error("Invalid output options: {0}")]
    #[diagnostic(code(fob_output::config))]
    Config(#[from] ConfigError),

    /// The bundler could not produce a bundle for the request.
    #[error("Bundle build failed: {0}")]
    #[diagnostic(code(fob_output::build_failure))]
    BuildFailure(#[source] BuildError),

    /// Serialized source map text was not valid JSON.
    #[error("Failed to parse source map: {0}")]
    #[diagnostic(
        code(fob_output::map_parse),
        help("the bundle returned source map text that is not a JSON document")
    )]
    MapParse(#[source] serde_json::Error),

    /// The relativized source map could not be turned back into JSON.
    #[error("Failed to serialize source map: {0}")]
    #[diagnostic(code(fob_output::map_serialize))]
    MapSerialize(#[source] serde_json::Error),

    /// The module manifest could not be rendered as JSON.
    #[error("Failed to serialize manifest: {0}")]
    #[diagnostic(code(fob_output::manifest_serialize))]
    ManifestSerialize(#[source] serde_json::Error),

    /// The first write task to fail during a save.
    #[error("Failed to write {kind} output to '{}': {source}", .path.display())]
    #[diagnostic(code(fob_output::write_failure))]
    WriteFailure {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

/// Result type alias for fob-output operations.
pub type Result<T> = std::result::Result<T, Error>;
