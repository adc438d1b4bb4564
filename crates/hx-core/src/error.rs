use std::path::PathBuf;

/// Alias for `Result<T, HexError>`.
pub type HexResult<T> = Result<T, HexError>;

/// Errors that can occur when building hexagrams or loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    /// An integer outside {6, 7, 8, 9} was offered as a line value.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    /// More than six lines were supplied for one hexagram.
    #[error("a hexagram has at most 6 lines, got {0}")]
    TooManyLines(usize),

    /// A hexagram key was not six characters of '0' and '1'.
    #[error("invalid hexagram key: \"{0}\"")]
    InvalidKey(String),

    /// The dataset file could not be read.
    #[error("cannot read dataset {}: {source}", path.display())]
    DatasetRead {
        /// Path of the dataset file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON of the expected shape.
    #[error("malformed dataset {origin}: {source}")]
    DatasetParse {
        /// Where the document came from (a path or "bundled").
        origin: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// A dataset entry violates the dataset invariants.
    #[error("malformed dataset {origin}: entry \"{key}\" {reason}")]
    InvalidEntry {
        /// Where the document came from.
        origin: String,
        /// The offending key.
        key: String,
        /// What is wrong with the entry.
        reason: String,
    },
}
