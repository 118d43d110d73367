use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the config directory (used by tests and
/// portable installs).
pub const CONFIG_DIR_ENV: &str = "DEVDASH_CONFIG_DIR";

/// Get the directory holding persisted state (the session document).
///
/// `$DEVDASH_CONFIG_DIR` wins when set and non-empty; otherwise the
/// platform config directory plus `devdash`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join("devdash"))
}
