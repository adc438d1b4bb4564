//! Error types for reading sessions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while loading, saving, or driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session file could not be read or written.
    #[error("cannot access session file {path}: {source}")]
    Io {
        /// The session file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The session file is not a valid session.
    #[error("corrupt session file {path}: {source}")]
    Corrupt {
        /// The session file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The session could not be serialized.
    #[error("cannot serialize session: {0}")]
    Serialize(serde_json::Error),

    /// Invalid argument to a command.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown interactive command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Dataset or line error.
    #[error("{0}")]
    Hex(#[from] hx_core::HexError),

    /// Reading error.
    #[error("{0}")]
    Oracle(#[from] hx_oracle::OracleError),
}
