// crates/domain/src/report.rs
use std::collections::BTreeMap;

use cloc_runner_shared_kernel::{FileCount, LineCount, OutputError, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Key of the metadata entry.
pub const HEADER_KEY: &str = "header";
/// Key of the aggregate totals entry.
pub const SUM_KEY: &str = "SUM";

/// Metadata the tool emits about one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub n_files: u64,
    #[serde(default)]
    pub n_lines: Option<u64>,
    #[serde(default)]
    pub cloc_url: Option<String>,
    #[serde(default)]
    pub cloc_version: Option<String>,
    #[serde(default)]
    pub elapsed_seconds: Option<f64>,
    #[serde(default)]
    pub files_per_second: Option<f64>,
    #[serde(default)]
    pub lines_per_second: Option<f64>,
}

/// Line classification of one language, file or the whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    #[serde(rename = "nFiles", default, skip_serializing_if = "Option::is_none")]
    pub n_files: Option<FileCount>,
    #[serde(default)]
    pub blank: LineCount,
    #[serde(default)]
    pub comment: LineCount,
    #[serde(default)]
    pub code: LineCount,
    /// Present on per-file entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Counts {
    /// Physical lines: blank + comment + code.
    pub fn lines(&self) -> LineCount {
        [self.blank, self.comment, self.code].iter().sum()
    }
}

/// Parsed tool output.
///
/// A structural pass-through: the JSON object exactly as the tool printed it,
/// keyed by language or file name plus the `header` and `SUM` entries. The
/// typed accessors deserialize on demand and report shape mismatches as
/// malformed output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    tree: Map<String, Value>,
}

impl Report {
    pub fn from_tree(tree: Map<String, Value>) -> Self {
        Self { tree }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of top-level entries, `header` and `SUM` included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tree.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tree.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn as_tree(&self) -> &Map<String, Value> {
        &self.tree
    }

    pub fn into_tree(self) -> Map<String, Value> {
        self.tree
    }

    pub fn header(&self) -> Result<Option<Header>> {
        self.typed(HEADER_KEY)
    }

    pub fn sum(&self) -> Result<Option<Counts>> {
        self.typed(SUM_KEY)
    }

    /// Language or file entries, without `header` and `SUM`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.tree
            .iter()
            .filter(|(k, _)| k.as_str() != HEADER_KEY && k.as_str() != SUM_KEY)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn counts(&self) -> Result<BTreeMap<String, Counts>> {
        self.entries()
            .map(|(key, value)| Ok((key.to_string(), decode(key, value)?)))
            .collect()
    }

    fn typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.tree.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(key, value).map(Some),
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| OutputError::UnexpectedShape { details: format!("entry '{key}': {e}") }.into())
}
