//! Source map documents and source path relativization.
//!
//! Bundlers record absolute file paths in `sources`, which ties a map to the
//! machine that built it. [`relativize`] rewrites those paths against a
//! configured root so persisted maps are identical across hosts.
//!
//! Only `sources` is interpreted. Every other field is carried through
//! verbatim and, when re-serialized, in its original relative order. Indexed maps (`sections`) are handled
//! by rewriting each nested map in turn.

use std::path::Path;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A source map document, either flat or indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMap {
    /// Entries may be `null` when a generator has no name for a source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Option<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SourceMapSection>>,

    /// `version`, `mappings`, `names`, `file` and anything else.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One entry of an indexed map's `sections` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMapSection {
    pub map: SourceMap,

    /// `offset` and any other section fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SourceMap {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::MapParse)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::MapSerialize)
    }

    /// All non-null source paths, depth first through sections.
    pub fn all_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_sources(&mut out);
        out
    }

    fn collect_sources<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(sections) = &self.sections {
            for section in sections {
                section.map.collect_sources(out);
            }
        } else if let Some(sources) = &self.sources {
            out.extend(sources.iter().flatten().map(String::as_str));
        }
    }
}

/// Rewrite the source paths in `map` relative to `root`.
///
/// With no root the map is returned unchanged. A source is rewritten only
/// when it is absolute in the same way as `root`: absolute sources against
/// an absolute root, relative sources against a relative one. Sources
/// outside `root` gain `..` segments. Null entries and mixed pairs are left
/// alone. No filesystem access happens, so the result depends only on the
/// inputs.
pub fn relativize(mut map: SourceMap, root: Option<&Path>) -> SourceMap {
    let Some(root) = root else {
        return map;
    };

    let root = root.clean();
    relativize_in_place(&mut map, &root);
    map
}

fn relativize_in_place(map: &mut SourceMap, root: &Path) {
    // An indexed map carries its sources in the nested maps only.
    if let Some(sections) = map.sections.as_mut() {
        for section in sections {
            relativize_in_place(&mut section.map, root);
        }
    } else if let Some(sources) = map.sources.as_mut() {
        for source in sources.iter_mut().flatten() {
            if let Some(relative) = relative_source(source, root) {
                *source = relative;
            }
        }
    }
}

fn relative_source(source: &str, root: &Path) -> Option<String> {
    let path = Path::new(source);
    if path.is_absolute() != root.is_absolute() {
        return None;
    }

    let relative = pathdiff::diff_paths(path.clean(), root)?;
    Some(to_slash(&relative))
}

fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
