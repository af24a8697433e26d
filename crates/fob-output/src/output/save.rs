//! The save coordinator.
//!
//! One save runs as:
//!
//! 1. validate options, log `start`
//! 2. assemble code and map, log `finish`
//! 3. plan artifacts and render every one of them
//! 4. dispatch all writes concurrently
//! 5. wait for every write to settle
//!
//! Nothing touches the writer until step 4, so build, map and manifest
//! errors never leave partial output behind. Writes are not cancelled when
//! a sibling fails; the first failure in completion order is returned once
//! all of them have settled.

use std::path::PathBuf;

use futures::StreamExt;
use futures::stream::FuturesUnordered;

use fob_output_config::OutputOptions;

use crate::assemble::{CodeWithMap, assemble};
use crate::bundle::Bundle;
use crate::events::{SaveEvent, SaveLogger};
use crate::manifest::build_manifest;
use crate::meta;
use crate::{Error, Result};

use super::artifact::{ArtifactKind, ArtifactSpec, plan_artifacts};
use super::writer::FileWriter;

/// An artifact that reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Successful outcome of [`save`]. Artifacts are listed in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub artifacts: Vec<WrittenArtifact>,
}

impl SaveReport {
    pub fn get(&self, kind: ArtifactKind) -> Option<&WrittenArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }
}

/// Write `bundle` and its companion artifacts as described by `options`.
pub async fn save(
    bundle: &dyn Bundle,
    options: &OutputOptions,
    writer: &dyn FileWriter,
    logger: &dyn SaveLogger,
) -> Result<SaveReport> {
    options.validate()?;

    logger.log(&SaveEvent::Start);
    let code_with_map = assemble(bundle, options.dev, options.sources_root())?;
    logger.log(&SaveEvent::Assembled);

    let rendered = plan_artifacts(options)
        .into_iter()
        .map(|spec| {
            let contents = render(&spec, bundle, &code_with_map, options)?;
            Ok((spec, contents))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut pending: FuturesUnordered<_> = rendered
        .iter()
        .enumerate()
        .map(|(index, (spec, contents))| {
            logger.log(&SaveEvent::Writing {
                kind: spec.kind,
                path: &spec.destination,
            });

            async move {
                let result = writer.write_file(&spec.destination, contents).await;
                if result.is_ok() {
                    logger.log(&SaveEvent::Written {
                        kind: spec.kind,
                        path: &spec.destination,
                        bytes: contents.len(),
                    });
                }
                (index, result)
            }
        })
        .collect();

    let mut written = vec![false; rendered.len()];
    let mut first_failure = None;

    while let Some((index, result)) = pending.next().await {
        let spec = &rendered[index].0;
        match result {
            Ok(()) => written[index] = true,
            Err(source) if first_failure.is_none() => {
                first_failure = Some(Error::WriteFailure {
                    kind: spec.kind,
                    path: spec.destination.clone(),
                    source,
                });
            }
            Err(source) => {
                tracing::warn!(
                    target: "fob_output",
                    kind = %spec.kind,
                    path = %spec.destination.display(),
                    error = %source,
                    "additional write failure after the first"
                );
            }
        }
    }
    drop(pending);

    if let Some(err) = first_failure {
        return Err(err);
    }

    let artifacts: Vec<WrittenArtifact> = rendered
        .into_iter()
        .zip(written)
        .filter(|(_, ok)| *ok)
        .map(|((spec, contents), _)| WrittenArtifact {
            kind: spec.kind,
            path: spec.destination,
            bytes: contents.len(),
        })
        .collect();

    logger.log(&SaveEvent::Finished {
        artifacts: artifacts.len(),
    });

    Ok(SaveReport { artifacts })
}

fn render(
    spec: &ArtifactSpec,
    bundle: &dyn Bundle,
    code_with_map: &CodeWithMap,
    options: &OutputOptions,
) -> Result<Vec<u8>> {
    Ok(match spec.kind {
        ArtifactKind::Bundle => options.bundle_encoding.encode(&code_with_map.code),
        ArtifactKind::Metadata => meta::compute(&code_with_map.code, options.bundle_encoding),
        ArtifactKind::SourceMap => code_with_map.map.clone().into_bytes(),
        ArtifactKind::Manifest => build_manifest(bundle)?.into_bytes(),
    })
}
