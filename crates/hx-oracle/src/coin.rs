//! The three-coin toss.
//!
//! Each coin lands heads (3) or tails (2) with equal probability. The sum of
//! three coins is the line value, so 7 and 8 each come up three times as
//! often as 6 and 9.

use std::fmt;

use hx_core::HexagramLine;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One face of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Counts 3.
    Heads,
    /// Counts 2.
    Tails,
}

impl CoinFace {
    /// The value this face contributes to the line.
    pub fn value(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// The three coins of one toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinToss {
    /// The faces, in the order they were thrown.
    pub coins: [CoinFace; 3],
}

impl CoinToss {
    /// Sum of the three faces (6 to 9).
    pub fn total(&self) -> u8 {
        self.coins.iter().map(|c| c.value()).sum()
    }

    /// The line this toss produces.
    pub fn line(&self) -> HexagramLine {
        let heads = self.coins.iter().filter(|c| **c == CoinFace::Heads).count();
        match heads {
            0 => HexagramLine::OldYin,
            1 => HexagramLine::YoungYang,
            2 => HexagramLine::YoungYin,
            _ => HexagramLine::OldYang,
        }
    }
}

impl fmt::Display for CoinToss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.coins;
        write!(f, "{a} {b} {c} = {}", self.total())
    }
}

/// Throw three coins.
pub fn toss_coins(rng: &mut StdRng) -> CoinToss {
    let mut throw = || {
        if rng.random_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    };
    CoinToss {
        coins: [throw(), throw(), throw()],
    }
}

/// Throw three coins and return only the resulting line.
pub fn toss_line(rng: &mut StdRng) -> HexagramLine {
    toss_coins(rng).line()
}
