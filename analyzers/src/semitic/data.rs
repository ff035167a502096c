//! Reference root datasets.
//!
//! A dataset is a JSON object keyed by canonical hyphenated root:
//!
//! ```json
//! {
//!   "ك-ت-ب": {
//!     "meaning": "writing",
//!     "semantic_field": "writing",
//!     "examples": { "كَتَبَ": "he wrote", "كِتَاب": "book" }
//!   }
//! }
//! ```
//!
//! Roots and examples keep their file order, which fixes the configuration
//! ids handed out by the analyzer.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const ARABIC_BUILTIN: &str = include_str!("../../data/roots/arabic_roots.json");
const HEBREW_BUILTIN: &str = include_str!("../../data/roots/hebrew_roots.json");

/// One root of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RootEntry {
    /// Short meaning of the root itself.
    #[serde(default)]
    pub meaning: String,
    /// Semantic field shared by the derivations.
    #[serde(default)]
    pub semantic_field: String,
    /// `(vocalized form, gloss)` pairs in file order.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub examples: Vec<(String, String)>,
}

/// An ordered root dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootData {
    roots: Vec<(String, RootEntry)>,
}

impl RootData {
    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the text is not a dataset object.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Reads a dataset from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::RootData`] when it does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&text).map_err(|source| Error::RootData {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), roots = data.len(), "loaded root data");
        Ok(data)
    }

    /// The dataset shipped for Arabic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootData`] if the embedded file is malformed.
    pub fn builtin_arabic() -> Result<Self> {
        Self::builtin("data/roots/arabic_roots.json", ARABIC_BUILTIN)
    }

    /// The dataset shipped for Hebrew.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootData`] if the embedded file is malformed.
    pub fn builtin_hebrew() -> Result<Self> {
        Self::builtin("data/roots/hebrew_roots.json", HEBREW_BUILTIN)
    }

    fn builtin(name: &str, text: &str) -> Result<Self> {
        let data = Self::from_json_str(text).map_err(|source| Error::RootData {
            path: PathBuf::from(name),
            source,
        })?;
        debug!(dataset = name, roots = data.len(), "loaded built-in root data");
        Ok(data)
    }

    /// Number of roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the dataset has no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Entry stored under exactly `root`.
    #[must_use]
    pub fn get(&self, root: &str) -> Option<&RootEntry> {
        self.roots
            .iter()
            .find(|(key, _)| key == root)
            .map(|(_, entry)| entry)
    }

    /// `(root, entry)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RootEntry)> {
        self.roots.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl FromIterator<(String, RootEntry)> for RootData {
    fn from_iter<I: IntoIterator<Item = (String, RootEntry)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for RootData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_map(PairVisitor(PhantomData))
            .map(|roots| Self { roots })
    }
}

fn ordered_pairs<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(PairVisitor(PhantomData))
}

/// Collects a JSON object into key/value pairs without reordering.
struct PairVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for PairVisitor<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(pair) = map.next_entry::<String, V>()? {
            pairs.push(pair);
        }
        Ok(pairs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn examples_keep_file_order() {
        let data = RootData::from_json_str(
            r#"{ "z-y-x": { "semantic_field": "f", "examples": { "b": "2", "a": "1", "c": "3" } } }"#,
        )
        .unwrap();
        let entry = data.get("z-y-x").unwrap();
        let forms: Vec<_> = entry.examples.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(forms, ["b", "a", "c"]);
        assert_eq!(entry.meaning, "");
    }

    #[test]
    fn missing_parts_default() {
        let data = RootData::from_json_str(r#"{ "a-b": {} }"#).unwrap();
        assert!(data.get("a-b").unwrap().examples.is_empty());
        assert!(data.get("b-a").is_none());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(RootData::from_json_str("[1, 2]").is_err());
        assert!(RootData::from_json_str(r#"{ "a": { "examples": { "x": 1 } } }"#).is_err());
    }

    #[test]
    fn builtin_datasets_parse() {
        let arabic = RootData::builtin_arabic().unwrap();
        assert!(arabic.get("ك-ت-ب").is_some());
        let hebrew = RootData::builtin_hebrew().unwrap();
        let malakh = hebrew.get("מ-ל-ך").unwrap();
        assert_eq!(malakh.examples[0].1, "king");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RootData::from_path(Path::new("/nonexistent/roots.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
