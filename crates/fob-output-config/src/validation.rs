//! Consistency checks on `OutputOptions`.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::options::OutputOptions;

impl OutputOptions {
    /// Check the options before any artifact is produced.
    ///
    /// Rejects an empty bundle path and any two artifacts sharing a
    /// destination.
    pub fn validate(&self) -> Result<()> {
        if self.bundle_output.as_os_str().is_empty() {
            return Err(ConfigError::MissingBundleOutput);
        }

        let meta_output = self.meta_output();
        let destinations = [
            Some(self.bundle_output.as_path()),
            Some(meta_output.as_path()),
            self.sourcemap_output.as_deref(),
            self.manifest_output.as_deref(),
        ];

        let mut seen: HashSet<&Path> = HashSet::new();
        for destination in destinations.into_iter().flatten() {
            if destination.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "artifact destination cannot be empty".to_string(),
                ));
            }
            if !seen.insert(destination) {
                return Err(ConfigError::DuplicateDestination(destination.to_path_buf()));
            }
        }

        Ok(())
    }
}
