//! Shared LLM backend traits and HTTP clients
//!
//! The classification and assistant services talk to their upstream models
//! through the capability traits defined here, so the parsing and fallback
//! logic can be unit-tested with stub backends instead of live network calls.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::{ChatMessage, LlmConfig};

const USER_AGENT: &str = concat!("scamshield/", env!("CARGO_PKG_VERSION"));

// Deterministic decoding parameters: low randomness and bounded output so
// repeated scans of similar content are reasonably stable.
const TEMPERATURE: f32 = 0.1;
const TOP_K: u32 = 1;
const TOP_P: f32 = 1.0;
const MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Upstream capability used by the classification service
///
/// Returns the model's free-text output, or `None` when the call succeeded
/// but the response envelope carried no text.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, BackendError>;
}

/// Upstream capability used by the assistant service
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, BackendError>;
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

/// HTTP client for a Gemini-style `generateContent` endpoint
pub struct GenerativeContentClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GenerativeContentClient {
    pub fn new(config: &LlmConfig, api_key: String) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.classifier_endpoint.as_str().trim_end_matches('/'),
            config.classifier_model
        );

        Self {
            client: build_http_client(config.request_timeout_secs),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl ClassifierBackend for GenerativeContentClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, BackendError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let envelope: GenerateContentResponse = response.json().await?;

        let text = envelope
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) })
            .map(|p| p.text);

        Ok(text)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    completion: Option<String>,
}

/// HTTP client for the assistant's chat-completion endpoint
pub struct ChatCompletionClient {
    client: Client,
    endpoint: String,
}

impl ChatCompletionClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: build_http_client(config.request_timeout_secs),
            endpoint: config.chat_endpoint.to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for ChatCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatCompletionRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let envelope: ChatCompletionResponse = response.json().await?;
        Ok(envelope.completion)
    }
}

fn build_http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LlmConfig;

    #[test]
    fn test_generate_content_endpoint_includes_model() {
        let config = LlmConfig::default();
        let client = GenerativeContentClient::new(&config, "test-key".to_string());
        assert!(client.endpoint.ends_with(&format!(
            "/models/{}:generateContent",
            config.classifier_model
        )));
    }

    #[test]
    fn test_envelope_text_extraction_shape() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "hello" } ] } }
            ]
        }"#;
        let envelope: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = envelope
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) })
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_empty_envelope_yields_no_text() {
        let envelope: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.candidates.is_none());
    }
}
