//! Module manifest serialization.
//!
//! The manifest maps every module in the bundle to its id and dependencies.
//! Modules are keyed by path in a `BTreeMap`, so serialization order never
//! depends on insertion order and unchanged bundles produce byte-identical
//! manifests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    pub modules: BTreeMap<String, ManifestModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestModule {
    pub id: u32,

    /// Paths of the modules this module requires, in require order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl BundleManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(
        mut self,
        path: impl Into<String>,
        id: u32,
        dependencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.modules.insert(
            path.into(),
            ManifestModule {
                id,
                dependencies: dependencies.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    /// Two-space indented JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::ManifestSerialize)
    }
}

/// Serialize the manifest of `bundle`.
pub fn build_manifest(bundle: &dyn Bundle) -> Result<String> {
    bundle.manifest().to_pretty_json()
}
