//! Shared utility functions

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that an
/// overridden HOME (containers, tests) is respected.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Utf8PathBuf::from_path_buf(home).map_err(|_| Error::HomeDirNotFound)
}

/// Expand a leading `~` to the home directory
///
/// Only `~` alone and `~/...` are expanded; `~user` forms are returned as-is.
pub fn expand_tilde(path: &str) -> Result<Utf8PathBuf> {
    if path == "~" {
        return get_home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(get_home_dir()?.join(rest));
    }

    Ok(Utf8PathBuf::from(path))
}
