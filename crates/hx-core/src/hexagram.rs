use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HexError, HexResult};
use crate::line::HexagramLine;
use crate::trigram::Trigram;

/// Number of lines in a complete hexagram.
pub const HEXAGRAM_LINES: usize = 6;

/// Which of the two derived hexagrams is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The inner (left, "before") hexagram.
    Inner,
    /// The outer (right, "after") hexagram.
    Outer,
}

impl Side {
    /// Both sides, inner first.
    pub const BOTH: [Self; 2] = [Self::Inner, Self::Outer];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => write!(f, "Inner"),
            Self::Outer => write!(f, "Outer"),
        }
    }
}

/// A hexagram of plain yin/yang bits, bottom line first.
///
/// Always derived from traditional lines; its length follows the number of
/// lines tossed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryHexagram {
    bits: Vec<u8>,
}

impl BinaryHexagram {
    /// Derive the hexagram for `side` from the full traditional sequence.
    pub fn derive(lines: &[HexagramLine], side: Side) -> Self {
        Self {
            bits: lines.iter().map(|line| line.bit(side)).collect(),
        }
    }

    /// Derive both hexagrams at once: `(inner, outer)`.
    pub fn derive_pair(lines: &[HexagramLine]) -> (Self, Self) {
        (
            Self::derive(lines, Side::Inner),
            Self::derive(lines, Side::Outer),
        )
    }

    /// Build a hexagram from explicit bits.
    pub fn from_bits(bits: &[u8]) -> HexResult<Self> {
        if bits.len() > HEXAGRAM_LINES {
            return Err(HexError::TooManyLines(bits.len()));
        }
        if let Some(bad) = bits.iter().find(|b| **b > 1) {
            return Err(HexError::InvalidKey(format!("bit {bad}")));
        }
        Ok(Self {
            bits: bits.to_vec(),
        })
    }

    /// The bits, bottom line first.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no line has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True when all six lines are present.
    pub fn is_complete(&self) -> bool {
        self.bits.len() == HEXAGRAM_LINES
    }

    /// The dataset lookup key for this hexagram.
    pub fn key(&self) -> HexagramKey {
        HexagramKey(self.bits.iter().map(|b| if *b == 1 { '1' } else { '0' }).collect())
    }

    /// The `(lower, upper)` trigrams, once the hexagram is complete.
    pub fn trigrams(&self) -> Option<(Trigram, Trigram)> {
        if !self.is_complete() {
            return None;
        }
        let lower = Trigram::from_bits(&self.bits[..3])?;
        let upper = Trigram::from_bits(&self.bits[3..])?;
        Some((lower, upper))
    }
}

impl fmt::Display for BinaryHexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The concatenated bits of a binary hexagram, bottom line first.
///
/// Keys built from incomplete hexagrams are shorter than six characters and
/// will not match any dataset entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexagramKey(String);

impl HexagramKey {
    /// Parse a complete six-character key of '0' and '1'.
    pub fn parse(s: &str) -> HexResult<Self> {
        let s = s.trim();
        if s.len() == HEXAGRAM_LINES && s.chars().all(|c| c == '0' || c == '1') {
            Ok(Self(s.to_string()))
        } else {
            Err(HexError::InvalidKey(s.to_string()))
        }
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the key describes all six lines.
    pub fn is_complete(&self) -> bool {
        self.0.len() == HEXAGRAM_LINES
    }
}

impl From<&BinaryHexagram> for HexagramKey {
    fn from(hexagram: &BinaryHexagram) -> Self {
        hexagram.key()
    }
}

impl fmt::Display for HexagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
