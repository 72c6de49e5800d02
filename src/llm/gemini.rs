//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `{model}:generateContent`. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{ProviderError, TextCompletion};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from a typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model, base_url: config.base_url })
    }

    /// Build a client from environment variables (see [`LlmConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(LlmConfig::from_env()?)
    }

    /// The configured model name (e.g. `"gemini-2.0-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete_inner(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{base}/{model}:generateContent?key={key}",
            base = self.base_url,
            model = self.model,
            key = self.api_key
        );
        let body = ApiRequest { contents: vec![RequestContent { parts: vec![Part { text: prompt.to_owned() }] }] };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if status != 200 {
            return Err(ProviderError::Response { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.complete_inner(prompt).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest {
    contents: Vec<RequestContent>,
}

#[derive(serde::Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, ProviderError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;

    let candidate = api
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Parse("no candidates in response".into()))?;

    if candidate.content.parts.is_empty() {
        return Err(ProviderError::Parse("candidate contained no text parts".into()));
    }

    Ok(candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join(""))
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
