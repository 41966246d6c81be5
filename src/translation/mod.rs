mod client;
mod language;

pub use client::{
    DEEPL_FREE_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_ENV, Translation, TranslationClient,
    TranslationRequest, USER_AGENT, parse_response,
};
pub use language::{
    LanguageRole, SOURCE_LANGUAGES, TARGET_ONLY_LANGUAGES, is_known_language, normalize_language,
    print_languages,
};
