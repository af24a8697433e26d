//! Layered loading of `OutputOptions` with figment.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format as _, Json, Serialized, Toml};

use crate::error::{ConfigError, Result};
use crate::options::OutputOptions;

/// Environment variable prefix, e.g. `FOB_OUTPUT_BUNDLE_OUTPUT`.
pub const ENV_PREFIX: &str = "FOB_OUTPUT_";

impl OutputOptions {
    /// Load options from an optional config file and the environment.
    ///
    /// Priority: environment variables > config file. The file format is
    /// chosen by extension (`.toml` or `.json`).
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = config_path {
            figment = figment.merge(file_provider(path)?);
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Layer the config file and environment over `self`.
    ///
    /// Fields absent from every layer keep their current values.
    pub fn merged_with(self, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(self));

        if let Some(path) = config_path {
            figment = figment.merge(file_provider(path)?);
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let options: OutputOptions = figment
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        tracing::debug!(
            bundle_output = %options.bundle_output.display(),
            encoding = %options.bundle_encoding,
            "loaded output options"
        );

        options.validate()?;
        Ok(options)
    }
}

fn file_provider(path: &Path) -> Result<Figment> {
    if !path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        )));
    }

    tracing::debug!(path = %path.display(), "merging output config file");

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
