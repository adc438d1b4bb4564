//! Reading sessions for Hexivium.
//!
//! A session wraps one [`hx_oracle::Reading`] together with the user's
//! question and a journal, persists all of it as JSON between CLI passes,
//! and exposes a line-oriented command dispatcher for the interactive loop.

pub mod config;
pub mod error;
pub mod journal;
pub mod session;
pub mod state;
pub mod store;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use session::{ConsultOutcome, QuestionOutcome, Session};
pub use state::SessionState;
pub use store::SessionStore;
