//! Subscriber setup for binaries that embed fob-output.
//!
//! Only available with the `logging` feature. Libraries should install their
//! own subscriber and pass [`TracingLogger`](crate::TracingLogger) to `save`.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// How much of a save's progress reaches the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveVerbosity {
    /// Only warnings, such as write failures after the first.
    Quiet,
    /// One line per artifact written.
    #[default]
    Artifacts,
    /// Artifacts plus the start, assembled and finished checkpoints.
    Checkpoints,
}

impl SaveVerbosity {
    fn directive(self) -> &'static str {
        match self {
            SaveVerbosity::Quiet => "fob_output=warn",
            SaveVerbosity::Artifacts => "fob_output=info",
            SaveVerbosity::Checkpoints => "fob_output=debug",
        }
    }
}

/// Install a global subscriber for save events.
///
/// `RUST_LOG`, when set, replaces the verbosity. Only the first call in a
/// process has any effect, and an existing global subscriber is kept.
///
/// ```rust,no_run
/// use fob_output::logging::{SaveVerbosity, init_logging};
///
/// init_logging(SaveVerbosity::Checkpoints);
/// ```
pub fn init_logging(verbosity: SaveVerbosity) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().without_time())
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_targets_save_events() {
        assert_eq!(SaveVerbosity::default(), SaveVerbosity::Artifacts);
        assert_eq!(SaveVerbosity::Quiet.directive(), "fob_output=warn");
        assert_eq!(SaveVerbosity::Checkpoints.directive(), "fob_output=debug");
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in [
            SaveVerbosity::Quiet,
            SaveVerbosity::Artifacts,
            SaveVerbosity::Checkpoints,
        ] {
            assert!(EnvFilter::try_new(verbosity.directive()).is_ok());
        }
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(SaveVerbosity::Quiet);
        init_logging(SaveVerbosity::Checkpoints);
    }
}
