//! XDG-style path utilities for the key file location.
//!
//! The key lives in a dot-directory under the user configuration directory,
//! preferring XDG Base Directory conventions over OS-specific locations.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DeeplError, Result};

/// Name of the dot-directory holding the key file.
pub const APP_DIR_NAME: &str = ".deepl";

/// Name of the key file inside [`APP_DIR_NAME`].
pub const KEY_FILE_NAME: &str = "key.json";

/// Returns the configuration directory for deepl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/.deepl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/.deepl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir()?.join(".config"),
    };
    Ok(base.join(APP_DIR_NAME))
}

/// Returns the path of the key file inside `dir`.
pub fn key_file(dir: &Path) -> PathBuf {
    dir.join(KEY_FILE_NAME)
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        DeeplError::storage(
            "Failed to determine home directory for",
            Path::new("~"),
            io::Error::new(io::ErrorKind::NotFound, "no home directory"),
        )
    })
}
