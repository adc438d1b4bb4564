use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HexError, HexResult};
use crate::hexagram::Side;

/// One traditional line value, produced by a single three-coin toss.
///
/// The numeric value encodes both polarity and movement: 6 and 9 are
/// "old" (changing) lines, 7 and 8 are "young" (stable) ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HexagramLine {
    /// 6: yin, changing into yang.
    OldYin,
    /// 7: stable yang.
    YoungYang,
    /// 8: stable yin.
    YoungYin,
    /// 9: yang, changing into yin.
    OldYang,
}

/// `(inner bit, outer bit)` per line value, indexed by `value - 6`.
const DERIVATION: [(u8, u8); 4] = [
    (0, 1), // 6
    (1, 1), // 7
    (0, 0), // 8
    (1, 0), // 9
];

impl HexagramLine {
    /// All four line values in ascending numeric order.
    pub const ALL: [Self; 4] = [Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang];

    /// The traditional numeric value (6, 7, 8 or 9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Build a line from its traditional numeric value.
    pub fn from_value(value: u8) -> HexResult<Self> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(HexError::InvalidLineValue(other)),
        }
    }

    /// True for 6 and 9, the lines that move between the two hexagrams.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The side whose changing-line text this line selects, if any.
    ///
    /// A 6 annotates the inner hexagram, a 9 the outer one.
    pub fn annotated_side(self) -> Option<Side> {
        match self {
            Self::OldYin => Some(Side::Inner),
            Self::OldYang => Some(Side::Outer),
            Self::YoungYang | Self::YoungYin => None,
        }
    }

    /// The bit this line contributes to the hexagram on `side`.
    pub fn bit(self, side: Side) -> u8 {
        let (inner, outer) = DERIVATION[usize::from(self.value() - 6)];
        match side {
            Side::Inner => inner,
            Side::Outer => outer,
        }
    }

    /// Traditional name of the line.
    pub fn name(self) -> &'static str {
        match self {
            Self::OldYin => "old yin",
            Self::YoungYang => "young yang",
            Self::YoungYin => "young yin",
            Self::OldYang => "old yang",
        }
    }
}

impl TryFrom<u8> for HexagramLine {
    type Error = HexError;

    fn try_from(value: u8) -> HexResult<Self> {
        Self::from_value(value)
    }
}

impl From<HexagramLine> for u8 {
    fn from(line: HexagramLine) -> Self {
        line.value()
    }
}

impl fmt::Display for HexagramLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_yang_is_inner_one_outer_zero() {
        assert_eq!(HexagramLine::OldYang.bit(Side::Inner), 1);
        assert_eq!(HexagramLine::OldYang.bit(Side::Outer), 0);
    }

    #[test]
    fn young_yin_is_zero_on_both_sides() {
        assert_eq!(HexagramLine::YoungYin.bit(Side::Inner), 0);
        assert_eq!(HexagramLine::YoungYin.bit(Side::Outer), 0);
    }

    #[test]
    fn young_yang_is_one_on_both_sides() {
        assert_eq!(HexagramLine::YoungYang.bit(Side::Inner), 1);
        assert_eq!(HexagramLine::YoungYang.bit(Side::Outer), 1);
    }

    #[test]
    fn old_yin_is_inner_zero_outer_one() {
        assert_eq!(HexagramLine::OldYin.bit(Side::Inner), 0);
        assert_eq!(HexagramLine::OldYin.bit(Side::Outer), 1);
    }

    #[test]
    fn from_value_accepts_only_traditional_values() {
        for line in HexagramLine::ALL {
            assert_eq!(HexagramLine::from_value(line.value()).unwrap(), line);
        }
        assert!(matches!(
            HexagramLine::from_value(5),
            Err(HexError::InvalidLineValue(5))
        ));
        assert!(HexagramLine::from_value(10).is_err());
    }

    #[test]
    fn changing_lines() {
        assert!(HexagramLine::OldYin.is_changing());
        assert!(HexagramLine::OldYang.is_changing());
        assert!(!HexagramLine::YoungYang.is_changing());
        assert!(!HexagramLine::YoungYin.is_changing());
    }

    #[test]
    fn annotated_side() {
        assert_eq!(HexagramLine::OldYin.annotated_side(), Some(Side::Inner));
        assert_eq!(HexagramLine::OldYang.annotated_side(), Some(Side::Outer));
        assert_eq!(HexagramLine::YoungYang.annotated_side(), None);
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&vec![HexagramLine::YoungYang, HexagramLine::OldYin]).unwrap();
        assert_eq!(json, "[7,6]");
        let back: Vec<HexagramLine> = serde_json::from_str("[9,8]").unwrap();
        assert_eq!(back, vec![HexagramLine::OldYang, HexagramLine::YoungYin]);
        assert!(serde_json::from_str::<HexagramLine>("4").is_err());
    }
}
