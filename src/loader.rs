//! Dataset loading: file I/O abstraction and JSON parsing.
//!
//! [`DatasetLoader`] is generic over [`ContentSource`] so it can read from
//! the filesystem ([`FsSource`]) or from an in-memory map ([`MemSource`],
//! used by tests and embedding callers). Parsing never retries: a network
//! or parse failure is fatal for that chart and surfaces with the file path
//! attached.

use crate::model::{CyclistRecord, Dataset, DatasetKind, GdpSample, RawCyclist};
use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;

/// Trait for abstracting file I/O (filesystem vs. in-memory source).
pub trait ContentSource {
    /// Read a file at the given logical path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
}

/// Reads files directly from the local filesystem.
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path.as_str()).with_context(|| format!("Failed to read {}", path))
    }
}

/// Serves files from an in-memory map keyed by logical path.
#[derive(Default)]
pub struct MemSource {
    files: BTreeMap<Utf8PathBuf, String>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl ContentSource for MemSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File {} not found in source", path))
    }
}

/// Loads and parses chart datasets from a [`ContentSource`].
pub struct DatasetLoader<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load a GDP dataset: either `{"data": [[date, value], …]}` or a bare
    /// array of pairs.
    pub fn load_gdp(&mut self, path: impl AsRef<Utf8Path>) -> Result<Vec<GdpSample>> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_gdp(&text).with_context(|| format!("Failed to parse GDP dataset {}", path))
    }

    /// Load a cyclist dataset (an array of record objects).
    pub fn load_cyclists(&mut self, path: impl AsRef<Utf8Path>) -> Result<Vec<CyclistRecord>> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_cyclists(&text).with_context(|| format!("Failed to parse cyclist dataset {}", path))
    }

    /// Load a dataset of either kind, detecting the shape from the JSON.
    pub fn load_auto(&mut self, path: impl AsRef<Utf8Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        let kind =
            detect_kind(&text).with_context(|| format!("Failed to parse dataset {}", path))?;
        let dataset = match kind {
            DatasetKind::Gdp => parse_gdp(&text).map(Dataset::Gdp),
            DatasetKind::Cyclists => parse_cyclists(&text).map(Dataset::Cyclists),
        };
        dataset.with_context(|| format!("Failed to parse dataset {}", path))
    }
}

/// Detect the dataset kind from the JSON shape: an array of objects with a
/// `Name` field is a cyclist dataset; a top-level `data` key or an array of
/// `[date, value]` pairs is a GDP dataset.
///
/// An empty array is treated as GDP; either way the dataset has no records
/// and scale construction reports the real problem.
pub fn detect_kind(text: &str) -> Result<DatasetKind> {
    let v: serde_json::Value = serde_json::from_str(text).context("Invalid JSON")?;
    match &v {
        serde_json::Value::Object(map) if map.contains_key("data") => Ok(DatasetKind::Gdp),
        serde_json::Value::Array(items) => match items.first() {
            Some(serde_json::Value::Object(obj)) if obj.contains_key("Name") => {
                Ok(DatasetKind::Cyclists)
            }
            Some(serde_json::Value::Array(_)) => Ok(DatasetKind::Gdp),
            None => Ok(DatasetKind::Gdp),
            Some(_) => bail!("Unrecognized dataset shape"),
        },
        _ => bail!("Unrecognized dataset shape"),
    }
}

/// Parse GDP dataset text into samples.
pub fn parse_gdp(text: &str) -> Result<Vec<GdpSample>> {
    let v: serde_json::Value = serde_json::from_str(text).context("Invalid JSON")?;
    let pairs_value = match &v {
        serde_json::Value::Object(map) => map
            .get("data")
            .ok_or_else(|| anyhow!("Missing top-level 'data' array"))?,
        _ => &v,
    };
    let pairs: Vec<(String, f64)> = serde_json::from_value(pairs_value.clone())
        .context("Expected an array of [date, value] pairs")?;
    pairs
        .iter()
        .map(|(date, value)| GdpSample::from_pair(date, *value))
        .collect()
}

/// Parse cyclist dataset text into records.
pub fn parse_cyclists(text: &str) -> Result<Vec<CyclistRecord>> {
    let raw: Vec<RawCyclist> =
        serde_json::from_str(text).context("Expected an array of cyclist records")?;
    raw.into_iter().map(CyclistRecord::try_from).collect()
}
