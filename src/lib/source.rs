//! Core types for interacting with source locators.
//!
//! A locator is a scheme-prefixed string naming one installable source.
//! Exactly two forms are recognized: `cp://<path>` (copy a local directory)
//! and `http://<url>` (fetch and unpack a remote archive). Anything else is
//! rejected when parsed.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::copy;
use crate::error::Error;
use crate::process::CommandRunner;
use crate::tar;

const LOCAL_COPY_PREFIX: &str = "cp://";
const REMOTE_ARCHIVE_PREFIX: &str = "http://";

/// A parsed source locator, tagged by its extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Copy the contents of a local directory into the target.
    /// The path may be relative; it is made absolute at extraction time.
    LocalCopy(PathBuf),
    /// Stream-fetch a remote tar.gz archive and unpack it into the target.
    /// Carries the complete URL, scheme included.
    RemoteArchive(String),
}

impl Source {
    /// Parse a locator string, failing fast on any unrecognized prefix.
    pub fn parse<S: AsRef<str>>(locator: S) -> Result<Self, Error> {
        let locator = locator.as_ref();
        if let Some(path) = locator.strip_prefix(LOCAL_COPY_PREFIX) {
            Ok(Source::LocalCopy(PathBuf::from(path)))
        } else if locator.starts_with(REMOTE_ARCHIVE_PREFIX) {
            Ok(Source::RemoteArchive(locator.to_string()))
        } else {
            Err(Error::UnsupportedSource(locator.to_string()))
        }
    }

    /// Extract this source into `target` using the matching strategy.
    pub fn extract<P: AsRef<std::path::Path>>(
        &self,
        runner: &dyn CommandRunner,
        target: P,
    ) -> Result<(), Error> {
        match self {
            Source::LocalCopy(path) => copy::copy_to_target(runner, path, target.as_ref()),
            Source::RemoteArchive(url) => tar::extract_root_archive(runner, url, target.as_ref()),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::LocalCopy(path) => write!(f, "local copy: {}", path.display()),
            Source::RemoteArchive(url) => write!(f, "remote archive: {url}"),
        }
    }
}

/// A `sources` entry as it appears in configuration: either an ordered list
/// of locators, or a map from arbitrary keys to locators.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum SourceSet {
    /// Locators used verbatim, in document order.
    List(Vec<String>),
    /// Keyed locators; order is determined by the keys, not the document.
    Map(BTreeMap<String, String>),
}

impl SourceSet {
    /// Normalize to an ordered list of locators. This is the one place the
    /// install precedence of overlapping sources is decided: a keyed map is
    /// flattened in ascending string order of its keys.
    pub fn into_ordered(self) -> Vec<String> {
        match self {
            SourceSet::List(locators) => locators,
            // BTreeMap iterates in ascending key order.
            SourceSet::Map(keyed) => keyed.into_values().collect(),
        }
    }

    /// Whether the set carries no locators at all.
    pub fn is_empty(&self) -> bool {
        match self {
            SourceSet::List(locators) => locators.is_empty(),
            SourceSet::Map(keyed) => keyed.is_empty(),
        }
    }
}


#[cfg(test)]
mod test_source_set_ordering {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> SourceSet {
        SourceSet::Map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn list_order_is_preserved_verbatim() {
        let set = SourceSet::List(vec!["cp:///b".to_string(), "cp:///a".to_string()]);
        assert_eq!(set.into_ordered(), vec!["cp:///b", "cp:///a"]);
    }

    #[test]
    fn map_is_flattened_in_ascending_key_order() {
        let set = map_of(&[("20", "cp:///b"), ("10", "cp:///a")]);
        assert_eq!(set.into_ordered(), vec!["cp:///a", "cp:///b"]);
    }

    #[test]
    fn map_keys_sort_as_strings_not_numbers() {
        // "100" < "20" < "3" lexicographically.
        let set = map_of(&[("3", "third"), ("100", "first"), ("20", "second")]);
        assert_eq!(set.into_ordered(), vec!["first", "second", "third"]);
    }

    #[test]
    fn ordering_is_independent_of_insertion_order() {
        let forward = map_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let reverse = map_of(&[("c", "3"), ("b", "2"), ("a", "1")]);
        assert_eq!(forward.into_ordered(), reverse.into_ordered());
    }

    #[test]
    fn deserializes_from_toml_array() {
        #[derive(serde::Deserialize)]
        struct Doc {
            sources: SourceSet,
        }
        let doc: Doc = toml::from_str(r#"sources = ["cp:///a", "http://h/x.tar.gz"]"#).unwrap();
        assert_eq!(doc.sources.into_ordered(), vec!["cp:///a", "http://h/x.tar.gz"]);
    }

    #[test]
    fn deserializes_from_toml_table() {
        #[derive(serde::Deserialize)]
        struct Doc {
            sources: SourceSet,
        }
        let doc: Doc = toml::from_str(
            r#"
            [sources]
            "20" = "cp:///b"
            "10" = "cp:///a"
            "#,
        )
        .unwrap();
        assert_eq!(doc.sources.into_ordered(), vec!["cp:///a", "cp:///b"]);
    }
}
