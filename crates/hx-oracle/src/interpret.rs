//! Changing-line annotations joined against the hexagram dataset.
//!
//! A 6 at position i pulls line i of the inner hexagram's text; a 9 pulls
//! line i of the outer hexagram's text. All other slots stay blank.

use std::fmt;

use hx_core::{
    BinaryHexagram, DatasetEntry, HEXAGRAM_LINES, HexagramDataset, HexagramKey, HexagramLine,
    Lookup, Side,
};
use serde::{Deserialize, Serialize};

/// Name, number, and changing-line texts for one side of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramInfo {
    /// Lookup key, bottom line first.
    pub key: String,
    /// Display name; empty when the key is not in the dataset.
    pub name: String,
    /// Sequence number; `None` when the key is not in the dataset.
    pub number: Option<u8>,
    /// Six slots, bottom first; blank unless the line at that position has
    /// been cast and changes on this side.
    pub changing_lines: Vec<String>,
}

impl HexagramInfo {
    fn from_lookup<'a>(
        key: &HexagramKey,
        lookup: Lookup<'a>,
    ) -> (Self, Option<&'a DatasetEntry>) {
        let entry = lookup.entry();
        let info = match entry {
            Some(entry) => Self {
                key: key.to_string(),
                name: entry.name.clone(),
                number: Some(entry.number),
                changing_lines: vec![String::new(); HEXAGRAM_LINES],
            },
            None => Self::placeholder(key),
        };
        (info, entry)
    }

    /// Blank entry used when the key is not in the dataset.
    pub fn placeholder(key: &HexagramKey) -> Self {
        Self {
            key: key.to_string(),
            name: String::new(),
            number: None,
            changing_lines: vec![String::new(); HEXAGRAM_LINES],
        }
    }

    /// `"Name (#n)"`, or `"unknown"` for a placeholder.
    pub fn title(&self) -> String {
        match self.number {
            Some(n) if !self.name.is_empty() => format!("{} (#{n})", self.name),
            Some(n) => format!("#{n}"),
            None => "unknown".to_string(),
        }
    }

    /// Non-blank changing lines as `(1-based position, text)`.
    pub fn annotated(&self) -> impl Iterator<Item = (usize, &str)> {
        self.changing_lines
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(i, text)| (i + 1, text.as_str()))
    }
}

/// One changing line with the text it selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangingLine {
    /// 1-based position, 1 = bottom.
    pub position: usize,
    /// Which hexagram the text came from.
    pub side: Side,
    /// The line text.
    pub text: String,
}

impl fmt::Display for ChangingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {} ({} Change): {}",
            self.position, self.side, self.text
        )
    }
}

/// The annotation read-model for both hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangingLinesInfo {
    /// The inner (before) hexagram.
    pub inner: HexagramInfo,
    /// The outer (after) hexagram.
    pub outer: HexagramInfo,
}

impl ChangingLinesInfo {
    /// The info for one side.
    pub fn side(&self, side: Side) -> &HexagramInfo {
        match side {
            Side::Inner => &self.inner,
            Side::Outer => &self.outer,
        }
    }

    /// All changing lines, bottom to top.
    pub fn summary(&self) -> Vec<ChangingLine> {
        let mut out = Vec::new();
        let slots = self.inner.changing_lines.len().max(self.outer.changing_lines.len());
        for i in 0..slots {
            for side in Side::BOTH {
                let Some(text) = self.side(side).changing_lines.get(i) else {
                    continue;
                };
                if !text.is_empty() {
                    out.push(ChangingLine {
                        position: i + 1,
                        side,
                        text: text.clone(),
                    });
                }
            }
        }
        out
    }
}

/// Build the annotation read-model from lines and their derived hexagrams.
///
/// Never fails: a key missing from the dataset yields a blank placeholder.
/// At most six lines are considered.
pub fn interpret_changing_lines(
    lines: &[HexagramLine],
    inner: &BinaryHexagram,
    outer: &BinaryHexagram,
    dataset: &HexagramDataset,
) -> ChangingLinesInfo {
    let lines = &lines[..lines.len().min(HEXAGRAM_LINES)];
    let inner_key = inner.key();
    let outer_key = outer.key();
    let (mut inner_info, inner_entry) =
        HexagramInfo::from_lookup(&inner_key, lookup(dataset, &inner_key));
    let (mut outer_info, outer_entry) =
        HexagramInfo::from_lookup(&outer_key, lookup(dataset, &outer_key));

    for (i, line) in lines.iter().enumerate() {
        match line.annotated_side() {
            Some(Side::Inner) => {
                if let Some(entry) = inner_entry {
                    inner_info.changing_lines[i] = entry.line(i).to_string();
                }
            }
            Some(Side::Outer) => {
                if let Some(entry) = outer_entry {
                    outer_info.changing_lines[i] = entry.line(i).to_string();
                }
            }
            None => {}
        }
    }

    ChangingLinesInfo {
        inner: inner_info,
        outer: outer_info,
    }
}

fn lookup<'a>(dataset: &'a HexagramDataset, key: &HexagramKey) -> Lookup<'a> {
    let found = dataset.get(key);
    if !found.is_found() {
        if key.is_complete() {
            tracing::warn!(key = %key, "hexagram missing from dataset; using blank placeholder");
        } else {
            tracing::trace!(key = %key, "incomplete key, skipping dataset lookup");
        }
    }
    found
}
