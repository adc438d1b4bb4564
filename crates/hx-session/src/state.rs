//! The persisted value behind a session.

use chrono::{DateTime, Utc};
use hx_oracle::Reading;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::journal::Journal;

/// Everything a session keeps between passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Session identifier.
    pub id: Uuid,
    /// When the session was started.
    pub created_at: DateTime<Utc>,
    /// Base seed for coin tosses.
    pub seed: u64,
    /// The reading so far.
    pub reading: Reading,
    /// The user's question; only ever set once the reading is complete.
    #[serde(default)]
    pub user_question: Option<String>,
    /// Session history.
    #[serde(default)]
    pub journal: Journal,
}

impl SessionState {
    /// A fresh session with an empty reading.
    pub fn new(seed: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            seed,
            reading: Reading::new(),
            user_question: None,
            journal: Journal::new(),
        }
    }

    /// RNG for the next toss.
    ///
    /// Derived from the base seed and the toss count so a rehydrated session
    /// casts the same line it would have cast without the round trip.
    pub fn toss_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(self.reading.toss_count() as u64))
    }

    /// The question, if one has been recorded.
    pub fn question(&self) -> &str {
        self.user_question.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let s = SessionState::new(42);
        assert_eq!(s.seed, 42);
        assert_eq!(s.reading.toss_count(), 0);
        assert_eq!(s.question(), "");
        assert!(s.journal.is_empty());
    }

    #[test]
    fn toss_rng_depends_on_count() {
        use rand::Rng;
        let mut s = SessionState::new(1);
        let a: u64 = s.toss_rng().random();
        let again: u64 = s.toss_rng().random();
        assert_eq!(a, again);
        s.reading.record(hx_core::HexagramLine::YoungYang);
        let b: u64 = s.toss_rng().random();
        assert_ne!(a, b);
    }

    #[test]
    fn serde_roundtrip() {
        let mut s = SessionState::new(9);
        s.reading.record(hx_core::HexagramLine::OldYin);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains(r#""reading":{"lines":[6],"toss_count":1}"#));
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
