//! Progress events emitted while saving a bundle.
//!
//! The coordinator reports progress through a [`SaveLogger`] passed into
//! each call. Logging is fire-and-forget: `log` returns nothing, and the
//! save never waits on or reacts to a sink.

use std::fmt;
use std::path::Path;

use crate::output::artifact::ArtifactKind;

/// A checkpoint in one save invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEvent<'a> {
    Start,
    /// Code and source map have been extracted from the bundle.
    Assembled,
    Writing { kind: ArtifactKind, path: &'a Path },
    Written { kind: ArtifactKind, path: &'a Path, bytes: usize },
    Finished { artifacts: usize },
}

impl fmt::Display for SaveEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveEvent::Start => f.write_str("start"),
            SaveEvent::Assembled => f.write_str("finish"),
            SaveEvent::Writing { kind, path } => {
                write!(f, "Writing {} output to: {}", kind, path.display())
            }
            SaveEvent::Written { kind, .. } => write!(f, "Done writing {} output", kind),
            SaveEvent::Finished { artifacts } => write!(f, "Wrote {} artifacts", artifacts),
        }
    }
}

/// Sink for [`SaveEvent`]s.
pub trait SaveLogger: Send + Sync {
    fn log(&self, event: &SaveEvent<'_>);
}

impl<F> SaveLogger for F
where
    F: Fn(&SaveEvent<'_>) + Send + Sync,
{
    fn log(&self, event: &SaveEvent<'_>) {
        self(event)
    }
}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl SaveLogger for TracingLogger {
    fn log(&self, event: &SaveEvent<'_>) {
        match event {
            SaveEvent::Start | SaveEvent::Assembled => {
                tracing::debug!(target: "fob_output", "{}", event)
            }
            SaveEvent::Writing { kind, path } => tracing::info!(
                target: "fob_output",
                kind = %kind,
                path = %path.display(),
                "{}",
                event
            ),
            SaveEvent::Written { kind, path, bytes } => tracing::info!(
                target: "fob_output",
                kind = %kind,
                path = %path.display(),
                bytes = *bytes,
                "{}",
                event
            ),
            SaveEvent::Finished { artifacts } => {
                tracing::debug!(target: "fob_output", artifacts = *artifacts, "{}", event)
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl SaveLogger for NoopLogger {
    fn log(&self, _event: &SaveEvent<'_>) {}
}
