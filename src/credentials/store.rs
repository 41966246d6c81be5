use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DeeplError, Result};
use crate::fs::atomic_write;
use crate::paths;
use crate::ui::Style;

/// Value written to a freshly created key file.
pub const PLACEHOLDER_KEY: &str = "apiapiapi";

/// Environment variable that overrides the stored key for translation.
pub const API_KEY_ENV: &str = "DEEPL_AUTH_KEY";

/// On-disk shape of `key.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct KeyFile {
    apikey: String,
}

/// Reads and writes the DeepL API key stored in `key.json`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
    key_path: PathBuf,
}

impl CredentialStore {
    /// Creates a store rooted at the user configuration directory.
    ///
    /// Nothing is touched on disk until a key is loaded or written.
    pub fn new() -> Result<Self> {
        Ok(Self::in_dir(paths::config_dir()?))
    }

    /// Creates a store that keeps its key file inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let key_path = paths::key_file(&dir);
        Self { dir, key_path }
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Loads the stored key, creating the directory and a placeholder file on first use.
    pub fn load(&self) -> Result<String> {
        if self.ensure_key_file()? {
            crate::status!(
                "{} First use detected: a placeholder key was written to {}\n  \
                 Set your own key with: deepl update-key",
                Style::warning("Note:"),
                Style::secondary(self.key_path.display())
            );
        }

        let contents = fs::read_to_string(&self.key_path)
            .map_err(|e| DeeplError::storage("Failed to read key file", &self.key_path, e))?;

        let key_file: KeyFile = serde_json::from_str(&contents)
            .map_err(|e| DeeplError::storage("Failed to parse key file", &self.key_path, e))?;

        Ok(key_file.apikey)
    }

    /// Returns the stored key unchanged, for display.
    pub fn view(&self) -> Result<String> {
        self.load()
    }

    /// Returns the key to authenticate with.
    ///
    /// A non-empty `DEEPL_AUTH_KEY` takes priority over the key file, in which
    /// case the file is not read at all.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
        self.load()
    }

    /// Replaces the stored key with `new_key`, trimmed of surrounding whitespace.
    pub fn update(&self, new_key: &str) -> Result<()> {
        let apikey = new_key.trim();
        if apikey.is_empty() {
            return Err(DeeplError::Validation("API key cannot be empty".to_string()));
        }

        self.ensure_dir()?;
        self.write_key(apikey)
    }

    /// Removes the key file.
    ///
    /// Returns `false` when there was no key file to remove. The next
    /// [`load`](Self::load) writes a fresh placeholder.
    pub fn delete(&self) -> Result<bool> {
        match fs::remove_file(&self.key_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DeeplError::storage(
                "Failed to delete key file",
                &self.key_path,
                e,
            )),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| DeeplError::storage("Failed to create config directory", &self.dir, e))
    }

    /// Returns `true` if the key file had to be created.
    fn ensure_key_file(&self) -> Result<bool> {
        self.ensure_dir()?;

        if self.key_path.exists() {
            return Ok(false);
        }

        self.write_key(PLACEHOLDER_KEY)?;
        Ok(true)
    }

    fn write_key(&self, apikey: &str) -> Result<()> {
        let key_file = KeyFile {
            apikey: apikey.to_string(),
        };
        let mut contents = serde_json::to_string(&key_file)
            .map_err(|e| DeeplError::storage("Failed to serialize key for", &self.key_path, e))?;
        contents.push('\n');

        atomic_write(&self.key_path, contents.as_bytes())
            .map_err(|e| DeeplError::storage("Failed to write key file", &self.key_path, e))
    }
}
