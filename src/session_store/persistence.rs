//! Session persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::Session;

const SESSION_FILENAME: &str = "session.json";

/// Path of the session document inside the config directory.
pub fn session_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SESSION_FILENAME)
}

/// Loads the persisted session from the config directory.
///
/// A missing file is the normal first-run case and yields the defaults
/// (logged out, light theme). An unreadable or corrupt file also yields the
/// defaults, with a warning; a bad session document must never block
/// startup.
pub fn load_session(config_dir: &Path) -> Session {
    let path = session_file_path(config_dir);
    if !path.exists() {
        return Session::default();
    }

    match read_session(&path) {
        Ok(session) => session,
        Err(err) => {
            warn!("Discarding unreadable session file {}: {err:#}", path.display());
            Session::default()
        }
    }
}

fn read_session(path: &Path) -> Result<Session> {
    let text = fs::read_to_string(path).context("Failed to read session file")?;
    serde_json::from_str(&text).context("Failed to parse session JSON")
}

/// Saves the session atomically (temp file + rename).
pub fn save_session(config_dir: &Path, session: &Session) -> Result<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).context("Failed to create config directory")?;
    }

    let path = session_file_path(config_dir);
    let temp = config_dir.join(format!("{SESSION_FILENAME}.tmp"));
    let json = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
    fs::write(&temp, json).context("Failed to write session temp file")?;
    fs::rename(&temp, &path).context("Failed to rename session temp file")?;

    Ok(())
}
