//! Configuration for a reading session.

use std::path::{Path, PathBuf};

use hx_core::HexagramDataset;
use hx_oracle::CommandInterpreter;

use crate::error::SessionResult;

/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = "hexivium-session.json";

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for a new session; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Where the session is persisted between passes.
    pub session_path: PathBuf,
    /// Dataset file overriding the bundled one.
    pub dataset_path: Option<PathBuf>,
    /// Interpreter command line, e.g. `llm -m small`.
    pub interpreter: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            session_path: PathBuf::from(DEFAULT_SESSION_FILE),
            dataset_path: None,
            interpreter: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the session file.
    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    /// Use a dataset file instead of the bundled one.
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = Some(path.into());
        self
    }

    /// Set the interpreter command line. Blank clears it.
    pub fn with_interpreter(mut self, command: impl Into<String>) -> Self {
        let command = command.into();
        self.interpreter = if command.trim().is_empty() {
            None
        } else {
            Some(command)
        };
        self
    }

    /// The session file path.
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Load the configured dataset, falling back to the bundled one.
    pub fn load_dataset(&self) -> SessionResult<HexagramDataset> {
        let dataset = match &self.dataset_path {
            Some(path) => HexagramDataset::from_path(path)?,
            None => HexagramDataset::bundled()?,
        };
        Ok(dataset)
    }

    /// Build the configured interpreter, if any.
    pub fn interpreter(&self) -> Option<CommandInterpreter> {
        self.interpreter
            .as_deref()
            .and_then(CommandInterpreter::from_command_line)
    }
}
