//! Error types for the divination engine.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while building or restoring a reading.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A reading was restored with more than six lines.
    #[error("a reading has at most 6 lines, got {0}")]
    TooManyLines(usize),

    /// A restored toss count disagrees with the recorded lines.
    #[error("toss count {count} does not match {lines} recorded lines")]
    InconsistentTossCount {
        /// The persisted toss count.
        count: usize,
        /// The number of persisted lines.
        lines: usize,
    },

    /// Core hexagram error.
    #[error("{0}")]
    Hex(#[from] hx_core::HexError),
}
