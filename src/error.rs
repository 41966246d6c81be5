//! Error types shared by the credential store and the translation client.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while managing the API key or calling DeepL.
#[derive(Debug, Error)]
pub enum DeeplError {
    /// The key file or its directory could not be created, read, parsed or written.
    #[error("{action} {}", path.display())]
    Storage {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The request could not be sent or the connection failed.
    #[error("Failed to reach the DeepL API")]
    Network(#[source] reqwest::Error),

    /// DeepL answered with a non-success status code.
    #[error("DeepL API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the JSON shape DeepL documents.
    #[error("Unexpected response from the DeepL API: {0}")]
    ResponseFormat(String),

    /// Missing or invalid user input.
    #[error("{0}")]
    Validation(String),
}

impl DeeplError {
    pub(crate) fn storage(
        action: &'static str,
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Storage {
            action,
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Result type for credential and translation operations.
pub type Result<T> = std::result::Result<T, DeeplError>;
