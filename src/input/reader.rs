use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};

use crate::error::DeeplError;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Returns the text to translate.
    ///
    /// Positional words are joined with single spaces. With no words, piped
    /// stdin is read; an interactive terminal is never waited on.
    pub fn read(words: &[String]) -> Result<String> {
        if !words.is_empty() {
            return Self::from_words(words);
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(missing_text().into());
        }
        Self::read_from(stdin.lock())
    }

    fn from_words(words: &[String]) -> Result<String> {
        let text = words.join(" ");
        if text.trim().is_empty() {
            return Err(missing_text().into());
        }
        check_size(text.len())?;
        Ok(text)
    }

    fn read_from(mut reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len())?;
        }

        let text = String::from_utf8(buffer)
            .map_err(|_| DeeplError::Validation("Input is not valid UTF-8".to_string()))?;
        let text = text.trim_end_matches(['\r', '\n']).to_string();

        if text.trim().is_empty() {
            return Err(missing_text().into());
        }
        Ok(text)
    }
}

fn missing_text() -> DeeplError {
    DeeplError::Validation(
        "No text to translate\n\n\
         Pass it as arguments (deepl translate --to DE Hello world)\n\
         or pipe it in (echo 'Hello world' | deepl translate --to DE)"
            .to_string(),
    )
}

fn check_size(size: usize) -> Result<(), DeeplError> {
    if size > MAX_INPUT_SIZE {
        return Err(DeeplError::Validation(format!(
            "Input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
            size as f64 / 1024.0 / 1024.0
        )));
    }
    Ok(())
}
