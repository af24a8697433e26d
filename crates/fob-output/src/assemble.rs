//! Extraction of the `{code, map}` pair from a finished bundle.

use std::path::Path;

use crate::bundle::{Bundle, SourceMapSource};
use crate::sourcemap::{SourceMap, relativize};
use crate::Result;

/// Bundle code with its serialized, relativized source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeWithMap {
    pub code: String,
    pub map: String,
}

/// Pull code and source map out of `bundle`.
///
/// A text map is parsed first; malformed text fails with
/// [`Error::MapParse`](crate::Error::MapParse). The map's sources are made
/// relative to `sources_root` when one is given.
pub fn assemble(bundle: &dyn Bundle, dev: bool, sources_root: Option<&Path>) -> Result<CodeWithMap> {
    let map = match bundle.source_map(dev) {
        SourceMapSource::Text(text) => SourceMap::from_json(&text)?,
        SourceMapSource::Structured(map) => map,
    };

    let map = relativize(map, sources_root).to_json()?;

    Ok(CodeWithMap {
        code: bundle.source(dev),
        map,
    })
}
