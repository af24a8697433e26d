//! Property tests for source map relativization.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use proptest::prelude::*;
use serde_json::json;

use fob_output::{SourceMap, relativize};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,7}"
}

fn map_with_sources(sources: &[String]) -> SourceMap {
    serde_json::from_value(json!({
        "version": 3,
        "sources": sources,
        "names": ["x"],
        "mappings": "AACA"
    }))
    .unwrap()
}

proptest! {
    #[test]
    fn relativize_without_root_is_identity(
        files in prop::collection::vec(prop::collection::vec(segment(), 1..4), 0..6)
    ) {
        let sources: Vec<String> = files.iter().map(|f| format!("/{}", f.join("/"))).collect();
        let map = map_with_sources(&sources);
        prop_assert_eq!(relativize(map.clone(), None), map);
    }

    #[test]
    fn relativized_sources_resolve_back_to_originals(
        root in prop::collection::vec(segment(), 1..4),
        files in prop::collection::vec(prop::collection::vec(segment(), 1..4), 1..6)
    ) {
        let root = PathBuf::from(format!("/{}", root.join("/")));
        let sources: Vec<String> = files
            .iter()
            .map(|f| root.join(f.join("/")).to_string_lossy().into_owned())
            .collect();

        let out = relativize(map_with_sources(&sources), Some(root.as_path()));
        let rewritten = out.all_sources();

        prop_assert_eq!(rewritten.len(), sources.len());
        for (relative, original) in rewritten.into_iter().zip(&sources) {
            prop_assert!(Path::new(relative).is_relative());
            prop_assert_eq!(root.join(relative).clean(), Path::new(original).clean());
        }
        prop_assert_eq!(&out.fields, &map_with_sources(&sources).fields);
    }

    #[test]
    fn relative_root_resolves_relative_sources(
        root in prop::collection::vec(segment(), 1..3),
        files in prop::collection::vec(prop::collection::vec(segment(), 1..4), 1..6)
    ) {
        let root = PathBuf::from(root.join("/"));
        let sources: Vec<String> = files
            .iter()
            .map(|f| root.join(f.join("/")).to_string_lossy().into_owned())
            .collect();

        let out = relativize(map_with_sources(&sources), Some(root.as_path()));
        for (relative, original) in out.all_sources().into_iter().zip(&sources) {
            prop_assert!(!relative.starts_with(".."));
            prop_assert_eq!(root.join(relative).clean(), Path::new(original).clean());
        }
    }

    #[test]
    fn relativize_is_deterministic(
        root in prop::collection::vec(segment(), 1..3),
        files in prop::collection::vec(prop::collection::vec(segment(), 1..4), 1..4)
    ) {
        let root = PathBuf::from(format!("/{}", root.join("/")));
        let sources: Vec<String> = files.iter().map(|f| format!("/{}", f.join("/"))).collect();
        let map = map_with_sources(&sources);

        prop_assert_eq!(
            relativize(map.clone(), Some(root.as_path())),
            relativize(map, Some(root.as_path()))
        );
    }
}
