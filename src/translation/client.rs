use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{DeeplError, Result};

/// Translation endpoint for DeepL API Free keys.
pub const DEEPL_FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Environment variable replacing the endpoint, e.g. with the DeepL Pro URL.
pub const ENDPOINT_ENV: &str = "DEEPL_API_URL";

/// Sent as the `User-Agent` header on every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upper bound on one request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single text to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Target language code, e.g. `EN-US` or `RU`.
    pub target_lang: String,
    /// Source language code; `None` lets DeepL detect it.
    pub source_lang: Option<String>,
}

/// One entry of the `translations` array in a DeepL response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct TranslatePayload<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    // DeepL treats an empty source_lang differently from an absent one
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

impl<'a> From<&'a TranslationRequest> for TranslatePayload<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            text: [request.text.as_str()],
            target_lang: &request.target_lang,
            source_lang: request.source_lang.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// HTTP client for the DeepL `/v2/translate` endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl TranslationClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(DeeplError::Network)?;

        Ok(Self {
            client,
            endpoint: DEEPL_FREE_ENDPOINT.to_string(),
            api_key,
        })
    }

    /// Points the client at a different URL than the DeepL Free endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Applies a non-empty [`ENDPOINT_ENV`] override, if set.
    #[must_use]
    pub fn with_endpoint_from_env(self) -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_endpoint(url.trim()),
            _ => self,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Translates `request.text` and returns the translated text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        self.translate_detailed(request)
            .await
            .map(|translation| translation.text)
    }

    /// Like [`translate`](Self::translate), but keeps the detected source language.
    pub async fn translate_detailed(&self, request: &TranslationRequest) -> Result<Translation> {
        let payload = TranslatePayload::from(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(DeeplError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(DeeplError::Network)?;

        if !status.is_success() {
            return Err(DeeplError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        parse_response(&body)
    }
}

/// Extracts the first translation from a `/v2/translate` response body.
pub fn parse_response(body: &str) -> Result<Translation> {
    let response: TranslateResponse =
        serde_json::from_str(body).map_err(|e| DeeplError::ResponseFormat(e.to_string()))?;

    response
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| DeeplError::ResponseFormat("no translations in response".to_string()))
}

fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string());

    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        message
    };

    match status.as_u16() {
        403 => format!(
            "{message}\n\n\
             Check your API key with 'deepl view-key' or set it with 'deepl update-key'"
        ),
        456 => format!("{message}\n\nThe character quota for this billing period is used up"),
        _ => message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn request(source_lang: Option<&str>) -> TranslationRequest {
        TranslationRequest {
            text: "Hello world".to_string(),
            target_lang: "ES".to_string(),
            source_lang: source_lang.map(str::to_string),
        }
    }

    #[test]
    fn test_payload_omits_missing_source_lang() {
        let req = request(None);
        let json = serde_json::to_value(TranslatePayload::from(&req)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "text": ["Hello world"], "target_lang": "ES" })
        );
        assert!(json.get("source_lang").is_none());
    }

    #[test]
    fn test_payload_includes_source_lang() {
        let req = request(Some("EN"));
        let json = serde_json::to_value(TranslatePayload::from(&req)).unwrap();

        assert_eq!(json["source_lang"], "EN");
        assert_eq!(json["text"], serde_json::json!(["Hello world"]));
    }

    #[test]
    fn test_parse_response_first_translation() {
        let body = r#"{"translations":[{"text":"Hola mundo","detected_source_language":"EN"}]}"#;

        let translation = parse_response(body).unwrap();

        assert_eq!(translation.text, "Hola mundo");
        assert_eq!(translation.detected_source_language.as_deref(), Some("EN"));
    }

    #[test]
    fn test_parse_response_ignores_extra_translations() {
        let body = r#"{"translations":[{"text":"uno"},{"text":"dos"}]}"#;
        assert_eq!(parse_response(body).unwrap().text, "uno");
    }

    #[test]
    fn test_parse_response_empty_translations() {
        let result = parse_response(r#"{"translations":[]}"#);
        assert!(matches!(result, Err(DeeplError::ResponseFormat(_))));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let result = parse_response("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(DeeplError::ResponseFormat(_))));
    }

    #[test]
    fn test_parse_response_missing_translations() {
        let result = parse_response(r#"{"message":"something else"}"#);
        assert!(matches!(result, Err(DeeplError::ResponseFormat(_))));
    }

    #[test]
    fn test_parse_response_non_string_text() {
        let result = parse_response(r#"{"translations":[{"text":42}]}"#);
        assert!(matches!(result, Err(DeeplError::ResponseFormat(_))));
    }

    #[test]
    fn test_api_error_message_from_json() {
        let message = api_error_message(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"message":"Value for 'target_lang' not supported."}"#,
        );
        assert_eq!(message, "Value for 'target_lang' not supported.");
    }

    #[test]
    fn test_api_error_message_forbidden_hint() {
        let message = api_error_message(reqwest::StatusCode::FORBIDDEN, "");
        assert!(message.starts_with("Forbidden"));
        assert!(message.contains("deepl update-key"));
    }

    #[test]
    fn test_client_defaults_to_free_endpoint() {
        let client = TranslationClient::new("key:fx".to_string()).unwrap();
        assert_eq!(client.endpoint(), DEEPL_FREE_ENDPOINT);

        let client = client.with_endpoint("http://127.0.0.1:9/v2/translate");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/v2/translate");
    }

    #[test]
    #[serial]
    fn test_endpoint_env_override() {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(ENDPOINT_ENV, " https://api.deepl.com/v2/translate ") };
        let client = TranslationClient::new("key".to_string())
            .unwrap()
            .with_endpoint_from_env();
        unsafe { std::env::remove_var(ENDPOINT_ENV) };

        assert_eq!(client.endpoint(), "https://api.deepl.com/v2/translate");

        let client = TranslationClient::new("key".to_string())
            .unwrap()
            .with_endpoint_from_env();
        assert_eq!(client.endpoint(), DEEPL_FREE_ENDPOINT);
    }

    #[test]
    fn test_user_agent_has_version() {
        assert!(USER_AGENT.starts_with("deepl-cli/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
