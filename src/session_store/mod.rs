//! Session store: the persisted username/theme pair gating the UI.
//!
//! The session is loaded once when the store opens and every mutation
//! persists immediately. Validation failures are user-visible
//! [`SessionError`]s and never mutate state; disk failures are logged and
//! the in-memory session stays authoritative, so a read-only config
//! directory degrades to a per-run session rather than an error.

pub mod persistence;

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::models::{Session, Theme};
use persistence::{load_session, save_session};

/// Minimum accepted username length, in characters.
pub const MIN_USERNAME_LEN: usize = 6;

/// User-visible session validation errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 6 characters")]
    UsernameTooShort,
}

/// Owns the persisted session for the lifetime of the process.
#[derive(Debug)]
pub struct SessionStore {
    config_dir: PathBuf,
    session: Session,
}

impl SessionStore {
    /// Opens the store, loading any persisted session from `config_dir`.
    /// Missing or corrupt files yield the defaults (see
    /// [`persistence::load_session`]).
    pub fn open(config_dir: PathBuf) -> Self {
        let session = load_session(&config_dir);
        SessionStore { config_dir, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn username(&self) -> &str {
        &self.session.username
    }

    pub fn theme(&self) -> Theme {
        self.session.theme
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Validates and stores a username, persisting on acceptance.
    ///
    /// The stored value is the trimmed input. Rejection leaves the session
    /// untouched.
    pub fn set_username(&mut self, raw: &str) -> Result<(), SessionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::UsernameRequired);
        }
        if trimmed.chars().count() < MIN_USERNAME_LEN {
            return Err(SessionError::UsernameTooShort);
        }

        self.session.username = trimmed.to_string();
        self.persist();
        Ok(())
    }

    /// Flips light/dark and persists immediately.
    pub fn toggle_theme(&mut self) {
        self.session.theme = self.session.theme.toggled();
        self.persist();
    }

    /// Clears the username (removing the key from storage, not blanking it)
    /// and resets the theme to light. Callers owning view state must cascade
    /// their own reset.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = save_session(&self.config_dir, &self.session) {
            warn!("Failed to persist session: {err:#}");
        }
    }
}
