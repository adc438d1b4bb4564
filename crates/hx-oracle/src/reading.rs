//! The hexagram reading state machine.
//!
//! A reading accumulates up to six lines, bottom first. Every accepted toss
//! re-derives both binary hexagrams from the full sequence. Once six lines
//! are recorded the reading is complete and further tosses are rejected.

use hx_core::{BinaryHexagram, HEXAGRAM_LINES, HexagramDataset, HexagramLine};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::coin::{CoinToss, toss_coins};
use crate::error::{OracleError, OracleResult};
use crate::interpret::{ChangingLinesInfo, interpret_changing_lines};

/// Where a reading is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No line yet.
    Empty,
    /// One to five lines.
    InProgress,
    /// Six lines; no further tosses.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::InProgress => write!(f, "in progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Result of a toss action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TossOutcome {
    /// A line was appended.
    Accepted {
        /// The line that was recorded.
        line: HexagramLine,
        /// The coins behind it, when it came from a simulated toss.
        coins: Option<CoinToss>,
        /// 1-based position of the new line (1 = bottom).
        position: usize,
    },
    /// The reading was already complete; nothing changed.
    Rejected,
}

/// Persisted shape of a reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// The traditional lines, bottom first.
    pub lines: Vec<HexagramLine>,
    /// Number of tosses recorded; must equal `lines.len()`.
    pub toss_count: usize,
}

/// An in-progress or complete I-Ching reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReadingRecord", into = "ReadingRecord")]
pub struct Reading {
    lines: Vec<HexagramLine>,
    inner: BinaryHexagram,
    outer: BinaryHexagram,
}

impl Reading {
    /// Start an empty reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a reading from recorded lines.
    pub fn from_lines(lines: Vec<HexagramLine>) -> OracleResult<Self> {
        if lines.len() > HEXAGRAM_LINES {
            return Err(OracleError::TooManyLines(lines.len()));
        }
        let mut reading = Self {
            lines,
            ..Self::default()
        };
        reading.rederive();
        Ok(reading)
    }

    /// Toss three coins and record the resulting line.
    pub fn toss(&mut self, rng: &mut StdRng) -> TossOutcome {
        if self.is_complete() {
            tracing::debug!("toss rejected: reading already complete");
            return TossOutcome::Rejected;
        }
        let coins = toss_coins(rng);
        self.push(coins.line(), Some(coins))
    }

    /// Record a line obtained elsewhere, e.g. from physical coins.
    pub fn record(&mut self, line: HexagramLine) -> TossOutcome {
        if self.is_complete() {
            tracing::debug!("record rejected: reading already complete");
            return TossOutcome::Rejected;
        }
        self.push(line, None)
    }

    fn push(&mut self, line: HexagramLine, coins: Option<CoinToss>) -> TossOutcome {
        self.lines.push(line);
        self.rederive();
        let position = self.lines.len();
        tracing::debug!(position, value = line.value(), "line recorded");
        TossOutcome::Accepted {
            line,
            coins,
            position,
        }
    }

    fn rederive(&mut self) {
        let (inner, outer) = BinaryHexagram::derive_pair(&self.lines);
        self.inner = inner;
        self.outer = outer;
    }

    /// The traditional lines, bottom first.
    pub fn lines(&self) -> &[HexagramLine] {
        &self.lines
    }

    /// Number of tosses recorded.
    pub fn toss_count(&self) -> usize {
        self.lines.len()
    }

    /// Tosses still needed to complete the reading.
    pub fn remaining(&self) -> usize {
        HEXAGRAM_LINES - self.lines.len()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.lines.len() {
            0 => Phase::Empty,
            HEXAGRAM_LINES => Phase::Complete,
            _ => Phase::InProgress,
        }
    }

    /// True once six lines are recorded.
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// The inner hexagram derived so far.
    pub fn inner(&self) -> &BinaryHexagram {
        &self.inner
    }

    /// The outer hexagram derived so far.
    pub fn outer(&self) -> &BinaryHexagram {
        &self.outer
    }

    /// 1-based positions of the changing lines.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Join the changing lines against the dataset.
    pub fn interpret_changing_lines(&self, dataset: &HexagramDataset) -> ChangingLinesInfo {
        interpret_changing_lines(&self.lines, &self.inner, &self.outer, dataset)
    }
}

impl TryFrom<ReadingRecord> for Reading {
    type Error = OracleError;

    fn try_from(record: ReadingRecord) -> OracleResult<Self> {
        if record.toss_count != record.lines.len() {
            return Err(OracleError::InconsistentTossCount {
                count: record.toss_count,
                lines: record.lines.len(),
            });
        }
        Self::from_lines(record.lines)
    }
}

impl From<Reading> for ReadingRecord {
    fn from(reading: Reading) -> Self {
        let toss_count = reading.lines.len();
        Self {
            lines: reading.lines,
            toss_count,
        }
    }
}
