//! Gemini REST client.
//!
//! Calls `models/{model}:generateContent` directly over HTTPS with a blocking
//! reqwest client and classifies failures into transient and permanent
//! [`CompletionError`]s.

use super::client::{CompletionClient, CompletionError};
use crate::config::Config;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini generative-language API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client using the base URL and timeout from the config.
    pub fn from_config(api_key: impl Into<String>, config: &Config) -> crate::error::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            api_key: api_key.into(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    /// List models that support `generateContent`.
    pub fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        let response = self
            .client
            .get(self.models_url())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| {
                CompletionError::transient(format!("Failed to read response: {}", err.without_url()))
            })?;
        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }

        let parsed: ListModelsResponse = serde_json::from_str(&body).map_err(|err| {
            CompletionError::permanent(format!("Failed to parse model list: {err}"))
        })?;
        Ok(parsed
            .models
            .into_iter()
            .filter(|m| m.supports_generate_content())
            .collect())
    }
}

impl CompletionClient for GeminiClient {
    fn generate(&self, model: &str, text: &str) -> Result<String, CompletionError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        };

        debug!(model, "generateContent");
        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| {
                CompletionError::transient(format!("Failed to read response: {}", err.without_url()))
            })?;
        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }

        extract_text(&body)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// A model entry from the `models` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, CompletionError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|err| {
        CompletionError::permanent(format!("Failed to parse Gemini response: {err}"))
    })?;

    let text: String = parsed
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CompletionError::permanent(
            "Gemini API returned no text in the response candidates",
        ));
    }
    Ok(text)
}

/// The key travels in a header, and URLs are stripped from transport errors
/// so error text can be shown and logged as is.
fn map_transport_error(err: reqwest::Error) -> CompletionError {
    CompletionError::transient(format!("Gemini API request failed: {}", err.without_url()))
}

fn map_http_error(status: StatusCode, body: &str) -> CompletionError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(status_text) if !status_text.is_empty() => format!("{status_text}: {msg}"),
                _ => msg,
            }
        })
        .unwrap_or_else(|_| format!("HTTP {}: {}", status.as_u16(), body));

    let status_code = Some(status.as_u16());
    if is_transient_status(status) {
        CompletionError::Transient {
            status: status_code,
            message,
        }
    } else {
        CompletionError::Permanent {
            status: status_code,
            message,
        }
    }
}

/// Statuses worth retrying on another tier. 404 means the model name is not
/// served for this key or region, which another tier can still answer.
fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error()
        || matches!(
            status,
            StatusCode::NOT_FOUND | StatusCode::REQUEST_TIMEOUT | StatusCode::TOO_MANY_REQUESTS
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let client = GeminiClient::new("secret");
        assert_eq!(
            client.generate_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(
            client.models_url(),
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
        assert!(!client.generate_url("gemini-2.5-flash").contains("secret"));
    }

    #[test]
    fn test_from_config_trims_base_url() {
        let config = Config {
            api_base_url: "http://localhost:8080/v1beta/".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::from_config("k", &config).unwrap();
        assert_eq!(
            client.generate_url("m"),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn test_transport_error_does_not_leak_key() {
        let config = Config {
            api_base_url: "http://127.0.0.1:1/v1beta".to_string(),
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        let client = GeminiClient::from_config("SECRET-KEY-123", &config).unwrap();

        let err = client.generate("gemini-2.5-flash", "hi").unwrap_err();
        assert!(err.is_transient());
        assert!(!err.to_string().contains("SECRET-KEY-123"));

        let err = client.list_models().unwrap_err();
        assert!(!err.to_string().contains("SECRET-KEY-123"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Namaste! "}, {"text": "Start with reels."}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Namaste! Start with reels.");
    }

    #[test]
    fn test_extract_text_without_candidates_is_permanent() {
        let err = extract_text(r#"{"candidates": []}"#).unwrap_err();
        assert!(!err.is_transient());

        let err = extract_text("not json").unwrap_err();
        assert!(!err.is_transient());
    }

    #[test]
    fn test_http_error_classification() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body);
        assert!(err.is_transient());
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "RESOURCE_EXHAUSTED: Quota exceeded");

        assert!(map_http_error(StatusCode::NOT_FOUND, "{}").is_transient());
        assert!(map_http_error(StatusCode::SERVICE_UNAVAILABLE, "").is_transient());
        assert!(!map_http_error(StatusCode::BAD_REQUEST, "").is_transient());
        assert!(!map_http_error(StatusCode::FORBIDDEN, "").is_transient());
    }

    #[test]
    fn test_http_error_with_plain_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "HTTP 502: upstream down");
    }

    #[test]
    fn test_model_listing_filter() {
        let body = r#"{"models": [
            {"name": "models/gemini-2.5-flash", "displayName": "Gemini 2.5 Flash",
             "supportedGenerationMethods": ["generateContent", "countTokens"]},
            {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]}
        ]}"#;
        let parsed: ListModelsResponse = serde_json::from_str(body).unwrap();
        let usable: Vec<_> = parsed
            .models
            .into_iter()
            .filter(|m| m.supports_generate_content())
            .collect();
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].name, "models/gemini-2.5-flash");
        assert_eq!(usable[0].display_name.as_deref(), Some("Gemini 2.5 Flash"));
    }
}
