use anyhow::Result;

use crate::credentials::{CredentialStore, PLACEHOLDER_KEY};
use crate::error::DeeplError;
use crate::input::InputReader;
use crate::translation::{
    LanguageRole, TranslationClient, TranslationRequest, is_known_language, normalize_language,
};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Vec<String>,
}

/// Validates the options and turns them into a request, reading stdin if needed.
pub fn build_request(options: &TranslateOptions) -> Result<TranslationRequest> {
    let to = options.to.as_deref().ok_or_else(|| {
        DeeplError::Validation(
            "Missing required argument: --to <LANG>\n\n\
             Example: deepl translate --from EN --to RU hello world"
                .to_string(),
        )
    })?;

    let target_lang = normalize_language(to, LanguageRole::Target)?;
    let source_lang = options
        .from
        .as_deref()
        .map(|from| normalize_language(from, LanguageRole::Source))
        .transpose()?;

    hint_unknown_language(&target_lang, LanguageRole::Target);
    if let Some(source) = &source_lang {
        hint_unknown_language(source, LanguageRole::Source);
    }

    let text = InputReader::read(&options.text)?;

    Ok(TranslationRequest {
        text,
        target_lang,
        source_lang,
    })
}

fn hint_unknown_language(code: &str, role: LanguageRole) {
    if !is_known_language(code, role) {
        crate::status!(
            "{}",
            Style::hint(format!(
                "'{code}' is not in the known language list, sending it anyway"
            ))
        );
    }
}

pub async fn run_translate(options: TranslateOptions, store: &CredentialStore) -> Result<()> {
    let request = build_request(&options)?;

    let api_key = store.api_key()?;
    if api_key == PLACEHOLDER_KEY {
        crate::warn!(
            "{} Using the placeholder API key. Set your own with: deepl update-key",
            Style::warning("Warning:")
        );
    }

    let client = TranslationClient::new(api_key)?.with_endpoint_from_env();

    let spinner = Spinner::new("Translating...");
    let result = client.translate_detailed(&request).await;
    spinner.stop();

    let translation = result?;

    if request.source_lang.is_none()
        && let Some(detected) = &translation.detected_source_language
    {
        crate::status!("{}", Style::hint(format!("Detected source language: {detected}")));
    }

    println!("{}", translation.text);

    Ok(())
}
