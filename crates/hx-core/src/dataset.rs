//! The hexagram dataset: names, numbers, and line texts keyed by six-bit keys.
//!
//! A full copy of all 64 hexagrams is compiled into the crate. A different
//! document with the same shape can be loaded from disk. Loading validates
//! every entry and fails on the first malformed one; lookups never fail and
//! instead report [`Lookup::Missing`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HexError, HexResult};
use crate::hexagram::{HEXAGRAM_LINES, HexagramKey};

const BUNDLED: &str = include_str!("../data/hexagrams.json");

/// Highest hexagram number in the King Wen sequence.
pub const MAX_NUMBER: u8 = 64;

/// A single hexagram record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Display name.
    pub name: String,
    /// Sequence number, 1 to 64.
    pub number: u8,
    /// Chinese name, empty when the document omits it.
    #[serde(default)]
    pub chinese_name: String,
    /// Unicode hexagram glyph, empty when the document omits it.
    #[serde(default)]
    pub symbol: String,
    /// Line texts, bottom line first.
    pub lines: Vec<String>,
}

impl DatasetEntry {
    /// The text of line `index` (0 = bottom), or "" when out of range.
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Outcome of a dataset lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key is in the dataset.
    Found(&'a DatasetEntry),
    /// The key is not in the dataset (including incomplete keys).
    Missing,
}

impl<'a> Lookup<'a> {
    /// The entry, if found.
    pub fn entry(self) -> Option<&'a DatasetEntry> {
        match self {
            Self::Found(entry) => Some(entry),
            Self::Missing => None,
        }
    }

    /// True when the key was found.
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Read-only map from hexagram key to entry.
#[derive(Debug, Clone, Default)]
pub struct HexagramDataset {
    entries: BTreeMap<HexagramKey, DatasetEntry>,
}

impl HexagramDataset {
    /// The dataset compiled into the crate.
    pub fn bundled() -> HexResult<Self> {
        Self::from_json_str("bundled", BUNDLED)
    }

    /// Load a dataset document from disk.
    pub fn from_path(path: &Path) -> HexResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HexError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&path.display().to_string(), &text)
    }

    /// Parse and validate a dataset document.
    ///
    /// `origin` names the document in error messages.
    pub fn from_json_str(origin: &str, json: &str) -> HexResult<Self> {
        let raw: BTreeMap<String, DatasetEntry> =
            serde_json::from_str(json).map_err(|source| HexError::DatasetParse {
                origin: origin.to_string(),
                source,
            })?;

        let mut entries = BTreeMap::new();
        for (key, entry) in raw {
            let invalid = |reason: String| HexError::InvalidEntry {
                origin: origin.to_string(),
                key: key.clone(),
                reason,
            };
            let parsed = HexagramKey::parse(&key)
                .map_err(|_| invalid("is not six characters of '0' and '1'".to_string()))?;
            if entry.lines.len() != HEXAGRAM_LINES {
                return Err(invalid(format!(
                    "has {} lines, expected {HEXAGRAM_LINES}",
                    entry.lines.len()
                )));
            }
            if !(1..=MAX_NUMBER).contains(&entry.number) {
                return Err(invalid(format!(
                    "has number {}, expected 1 to {MAX_NUMBER}",
                    entry.number
                )));
            }
            entries.insert(parsed, entry);
        }

        tracing::debug!(origin, entries = entries.len(), "loaded hexagram dataset");
        if entries.len() < usize::from(MAX_NUMBER) {
            tracing::warn!(
                origin,
                entries = entries.len(),
                "dataset is partial; some readings will have blank names"
            );
        }

        Ok(Self { entries })
    }

    /// Look up a key.
    pub fn get(&self, key: &HexagramKey) -> Lookup<'_> {
        match self.entries.get(key) {
            Some(entry) => Lookup::Found(entry),
            None => Lookup::Missing,
        }
    }

    /// Find an entry by its sequence number.
    pub fn by_number(&self, number: u8) -> Option<(&HexagramKey, &DatasetEntry)> {
        self.entries.iter().find(|(_, e)| e.number == number)
    }

    /// Find an entry by name, ignoring case.
    pub fn by_name(&self, name: &str) -> Option<(&HexagramKey, &DatasetEntry)> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(_, e)| e.name.to_lowercase() == needle)
    }

    /// Entries ordered by sequence number.
    pub fn in_sequence(&self) -> Vec<(&HexagramKey, &DatasetEntry)> {
        let mut all: Vec<_> = self.entries.iter().collect();
        all.sort_by_key(|(_, e)| e.number);
        all
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
