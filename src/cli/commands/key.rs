//! API key command handlers.

use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode};
use std::io::{self, BufRead, IsTerminal};

use crate::credentials::CredentialStore;
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the stored key to stdout.
pub fn run_view_key(store: &CredentialStore) -> Result<()> {
    let key = store.view()?;
    println!("{key}");
    Ok(())
}

/// Stores a new key taken from `key`, a piped stdin line, or an interactive prompt.
pub fn run_update_key(store: &CredentialStore, key: Option<String>) -> Result<()> {
    let new_key = match key {
        Some(key) => key,
        None => {
            let Some(key) = read_new_key()? else {
                crate::status!("{}", Style::hint("Cancelled, API key unchanged"));
                return Ok(());
            };
            key
        }
    };

    store.update(&new_key)?;

    crate::status!(
        "{} API key updated: {}",
        Style::success("✓"),
        Style::secondary(store.key_path().display())
    );
    Ok(())
}

/// Removes the key file.
pub fn run_delete_key(store: &CredentialStore) -> Result<()> {
    if store.delete()? {
        crate::status!(
            "{} API key deleted: {}",
            Style::success("✓"),
            Style::secondary(store.key_path().display())
        );
    } else {
        crate::status!("No API key stored at {}", store.key_path().display());
    }
    Ok(())
}

fn read_new_key() -> Result<Option<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read API key from stdin")?;
        return Ok(Some(line));
    }

    handle_prompt_cancellation(|| {
        let key = Password::new("Enter the new API key for DeepL Translator:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?;
        Ok(key)
    })
}
