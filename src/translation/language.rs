//! DeepL language codes, normalization and listing.
//!
//! The tables mirror DeepL's published list and only drive `deepl languages`
//! and hints. Codes missing from them are still sent; DeepL has the final word.

use crate::error::{DeeplError, Result};
use crate::ui::Style;

/// Languages DeepL accepts as `source_lang`.
pub const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HE", "Hebrew"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TH", "Thai"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("VI", "Vietnamese"),
    ("ZH", "Chinese"),
];

/// Regional variants that are only valid as `target_lang`.
pub const TARGET_ONLY_LANGUAGES: &[(&str, &str)] = &[
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES-419", "Spanish (Latin American)"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("ZH-HANS", "Chinese (Simplified)"),
    ("ZH-HANT", "Chinese (Traditional)"),
];

/// Which side of the translation a language code is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

/// Returns `true` if `code` is in DeepL's published list for `role`.
pub fn is_known_language(code: &str, role: LanguageRole) -> bool {
    let in_table = |table: &[(&str, &str)]| table.iter().any(|(c, _)| *c == code);
    match role {
        LanguageRole::Source => in_table(SOURCE_LANGUAGES),
        LanguageRole::Target => in_table(SOURCE_LANGUAGES) || in_table(TARGET_ONLY_LANGUAGES),
    }
}

/// Trims and upper-cases a language code, e.g. `en-us` becomes `EN-US`.
///
/// Only the shape is checked (letters and digits, optionally split by `-`).
/// Whether DeepL supports the code is left to the API.
pub fn normalize_language(lang: &str, role: LanguageRole) -> Result<String> {
    let code = lang.trim().to_ascii_uppercase();

    let well_formed = !code.is_empty()
        && code
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));

    if well_formed {
        return Ok(code);
    }

    let kind = match role {
        LanguageRole::Source => "source",
        LanguageRole::Target => "target",
    };
    Err(DeeplError::Validation(format!(
        "Invalid {kind} language code: '{lang}'\n\n\
         Language codes look like EN, DE, PT-BR or ES-419.\n\
         Run 'deepl languages' to see the known codes."
    )))
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Source and target languages"));
    for (code, name) in SOURCE_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!("{}", Style::header("Target-only variants"));
    for (code, name) in TARGET_ONLY_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
}
