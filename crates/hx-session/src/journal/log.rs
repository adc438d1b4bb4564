//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The last `n` entries as their own journal.
    pub fn tail(&self, n: usize) -> Journal {
        let start = self.entries.len().saturating_sub(n);
        Journal {
            entries: self.entries[start..].to_vec(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# I-Ching Reading Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Toss {
                    position,
                    value,
                    coins,
                    ..
                } => {
                    out.push_str(&format!("**Line {position}**: {value}"));
                    if let Some(coins) = coins {
                        out.push_str(&format!(" ({coins})"));
                    }
                    out.push_str("\n\n");
                }
                JournalEntry::HexagramComplete { inner, outer, .. } => {
                    out.push_str(&format!("## {inner} → {outer}\n\n"));
                }
                JournalEntry::Question { text, .. } => {
                    out.push_str(&format!("**Question**: {text}\n\n"));
                }
                JournalEntry::Interpretation {
                    interpreter,
                    answer,
                    ..
                } => {
                    out.push_str(&format!("**Reading** ({interpreter}):\n\n{answer}\n\n"));
                }
                JournalEntry::InterpreterFailure { notice, .. } => {
                    out.push_str(&format!("*{notice}*\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("I-Ching Reading Journal\n=======================\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Toss {
                    position,
                    value,
                    coins,
                    ..
                } => {
                    out.push_str(&format!("Line {position}: {value}"));
                    if let Some(coins) = coins {
                        out.push_str(&format!(" ({coins})"));
                    }
                    out.push('\n');
                }
                JournalEntry::HexagramComplete { inner, outer, .. } => {
                    out.push_str(&format!("\n--- {inner} -> {outer} ---\n\n"));
                }
                JournalEntry::Question { text, .. } => {
                    out.push_str(&format!("Question: {text}\n\n"));
                }
                JournalEntry::Interpretation {
                    interpreter,
                    answer,
                    ..
                } => {
                    out.push_str(&format!("Reading ({interpreter}):\n{answer}\n\n"));
                }
                JournalEntry::InterpreterFailure { notice, .. } => {
                    out.push_str(&format!("Notice: {notice}\n\n"));
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n\n"));
                }
            }
        }
        out
    }
}
