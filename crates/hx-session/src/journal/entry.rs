//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A line was cast.
    Toss {
        /// 1-based position, 1 = bottom.
        position: usize,
        /// Traditional value, 6 to 9.
        value: u8,
        /// The coins, when the line came from a simulated toss.
        coins: Option<String>,
        /// When cast.
        timestamp: DateTime<Utc>,
    },
    /// The reading became complete.
    HexagramComplete {
        /// Inner hexagram title, e.g. `Already Fording (#63)`.
        inner: String,
        /// Outer hexagram title.
        outer: String,
        /// When completed.
        timestamp: DateTime<Utc>,
    },
    /// The user's question was recorded.
    Question {
        /// The question text.
        text: String,
        /// When asked.
        timestamp: DateTime<Utc>,
    },
    /// An interpreter answered.
    Interpretation {
        /// Interpreter label.
        interpreter: String,
        /// The question it answered.
        question: String,
        /// The answer.
        answer: String,
        /// When answered.
        timestamp: DateTime<Utc>,
    },
    /// An interpreter call failed.
    InterpreterFailure {
        /// Interpreter label.
        interpreter: String,
        /// Generic notice shown to the user.
        notice: String,
        /// Whether retrying may help.
        retryable: bool,
        /// When it failed.
        timestamp: DateTime<Utc>,
    },
    /// A user note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Toss { timestamp, .. }
            | Self::HexagramComplete { timestamp, .. }
            | Self::Question { timestamp, .. }
            | Self::Interpretation { timestamp, .. }
            | Self::InterpreterFailure { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
