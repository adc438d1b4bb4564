//! JSON file persistence for sessions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::state::SessionState;

/// Reads and writes a session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured session path.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.session_path())
    }

    /// The session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, or `None` when there is no file yet.
    pub fn load(&self) -> SessionResult<Option<SessionState>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let state = serde_json::from_str(&text).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "session loaded");
        Ok(Some(state))
    }

    /// Load the stored session, or start a fresh one.
    pub fn load_or_init(&self, config: &SessionConfig) -> SessionResult<SessionState> {
        match self.load()? {
            Some(state) => Ok(state),
            None => {
                let state = fresh_state(config);
                tracing::info!(path = %self.path.display(), id = %state.id, "new session");
                Ok(state)
            }
        }
    }

    /// Write the session, creating parent directories as needed.
    pub fn save(&self, state: &SessionState) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(state).map_err(SessionError::Serialize)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Replace whatever is stored with a fresh session and return it.
    pub fn reset(&self, config: &SessionConfig) -> SessionResult<SessionState> {
        let state = fresh_state(config);
        self.save(&state)?;
        tracing::info!(path = %self.path.display(), id = %state.id, "session reset");
        Ok(state)
    }
}

fn fresh_state(config: &SessionConfig) -> SessionState {
    SessionState::new(config.seed.unwrap_or_else(rand::random))
}
