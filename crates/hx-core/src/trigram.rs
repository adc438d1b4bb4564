//! The eight trigrams that make up the lower and upper halves of a hexagram.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ three yang lines.
    Heaven,
    /// ☷ three yin lines.
    Earth,
    /// ☳ yang below two yin.
    Thunder,
    /// ☵ yang between two yin.
    Water,
    /// ☶ yang above two yin.
    Mountain,
    /// ☴ yin below two yang.
    Wind,
    /// ☲ yin between two yang.
    Fire,
    /// ☱ yin above two yang.
    Lake,
}

impl Trigram {
    /// All trigrams in the order of the bundled reference table.
    pub const ALL: [Self; 8] = [
        Self::Heaven,
        Self::Earth,
        Self::Thunder,
        Self::Water,
        Self::Mountain,
        Self::Wind,
        Self::Fire,
        Self::Lake,
    ];

    /// Bits, bottom line first.
    pub fn bits(self) -> [u8; 3] {
        match self {
            Self::Heaven => [1, 1, 1],
            Self::Earth => [0, 0, 0],
            Self::Thunder => [1, 0, 0],
            Self::Water => [0, 1, 0],
            Self::Mountain => [0, 0, 1],
            Self::Wind => [0, 1, 1],
            Self::Fire => [1, 0, 1],
            Self::Lake => [1, 1, 0],
        }
    }

    /// Find the trigram for three bits, bottom line first.
    pub fn from_bits(bits: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.bits() == bits)
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Earth => "Earth",
            Self::Thunder => "Thunder",
            Self::Water => "Water",
            Self::Mountain => "Mountain",
            Self::Wind => "Wind",
            Self::Fire => "Fire",
            Self::Lake => "Lake",
        }
    }

    /// Chinese name.
    pub fn chinese_name(self) -> &'static str {
        match self {
            Self::Heaven => "乾",
            Self::Earth => "坤",
            Self::Thunder => "震",
            Self::Water => "坎",
            Self::Mountain => "艮",
            Self::Wind => "巽",
            Self::Fire => "離",
            Self::Lake => "兌",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.chinese_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_unique() {
        for a in Trigram::ALL {
            for b in Trigram::ALL {
                if a != b {
                    assert_ne!(a.bits(), b.bits(), "{a} and {b}");
                }
            }
        }
    }

    #[test]
    fn from_bits_round_trips() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_bits(&t.bits()), Some(t));
        }
        assert_eq!(Trigram::from_bits(&[1, 1]), None);
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Thunder.to_string(), "Thunder 震");
    }
}
