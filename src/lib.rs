//! # deepl - DeepL translation CLI
//!
//! `deepl` translates text from the command line using the DeepL REST API
//! and keeps the API key in a small JSON file under the user configuration
//! directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store your key (prompts if the key is omitted)
//! deepl update-key 279a2e9d-83b3-c416-7e2d-f721593e42a0:fx
//!
//! # Translate, letting DeepL detect the source language
//! deepl translate --to ES Hello world
//!
//! # Explicit source language, text from stdin
//! echo "Hello world" | deepl translate --from EN --to RU
//! ```
//!
//! ## Key file
//!
//! The key is stored in `$XDG_CONFIG_HOME/.deepl/key.json`
//! (or `~/.config/.deepl/key.json`):
//!
//! ```json
//! {"apikey":"279a2e9d-83b3-c416-7e2d-f721593e42a0:fx"}
//! ```
//!
//! `DEEPL_AUTH_KEY` overrides the stored key for translations.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Persisted API key management.
pub mod credentials;

/// Error types shared across the crate.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for the key file.
pub mod paths;

/// DeepL API client and language codes.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt handling).
pub mod ui;

pub use error::{DeeplError, Result};
