//! Core types for Hexivium: hexagram lines, binary hexagrams, and the dataset.
//!
//! This crate holds the data model every other crate builds on. It knows
//! nothing about randomness or sessions: a [`HexagramLine`] is a value, a
//! [`BinaryHexagram`] is derived from lines, and a [`HexagramDataset`] maps
//! six-bit keys to names, numbers, and line texts.

/// The bundled and file-backed hexagram dataset.
pub mod dataset;
/// Error types used throughout the crate.
pub mod error;
/// Binary hexagrams and their lookup keys.
pub mod hexagram;
/// Traditional line values (6, 7, 8, 9).
pub mod line;
/// Plain-text rendering of hexagram lines.
pub mod render;
/// The eight trigrams.
pub mod trigram;

/// Re-export dataset types.
pub use dataset::{DatasetEntry, HexagramDataset, Lookup};
/// Re-export error types.
pub use error::{HexError, HexResult};
/// Re-export hexagram types.
pub use hexagram::{BinaryHexagram, HEXAGRAM_LINES, HexagramKey, Side};
/// Re-export line types.
pub use line::HexagramLine;
/// Re-export trigram types.
pub use trigram::Trigram;
