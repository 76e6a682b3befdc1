//! Session gate
//!
//! A cosmetic presence flag: a display name stored on disk so the toolbox
//! can greet its user. This is NOT authentication and must never become a
//! security boundary - there are no credentials and nothing is protected
//! by it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::ToolboxPaths;
use crate::error::{ToolboxError, ToolboxResult};

/// A stored display-name session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Display name chosen at login
    pub username: String,
    /// When the session was created
    pub logged_in_at: DateTime<Utc>,
}

/// Service for the display-name session gate
pub struct SessionService<'a> {
    paths: &'a ToolboxPaths,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(paths: &'a ToolboxPaths) -> Self {
        Self { paths }
    }

    /// Store a session for the given display name
    pub fn login(&self, username: &str) -> ToolboxResult<Session> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ToolboxError::Session("display name cannot be empty".into()));
        }

        self.paths.ensure_directories()?;
        let session = Session {
            username: username.to_string(),
            logged_in_at: Utc::now(),
        };

        let contents = serde_json::to_string_pretty(&session)?;
        std::fs::write(self.paths.session_file(), contents)
            .map_err(|e| ToolboxError::Io(format!("Failed to write session file: {}", e)))?;

        Ok(session)
    }

    /// Remove the stored session; returns whether one existed
    pub fn logout(&self) -> ToolboxResult<bool> {
        let path = self.paths.session_file();
        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path)
            .map_err(|e| ToolboxError::Io(format!("Failed to remove session file: {}", e)))?;
        Ok(true)
    }

    /// The current session, if any
    pub fn current(&self) -> ToolboxResult<Option<Session>> {
        let path = self.paths.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ToolboxError::Io(format!("Failed to read session file: {}", e)))?;
        let session: Session = serde_json::from_str(&contents)
            .map_err(|e| ToolboxError::Session(format!("Corrupt session file: {}", e)))?;

        Ok(Some(session))
    }
}
