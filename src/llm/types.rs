//! Provider-neutral text-completion trait and errors.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by text-completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed (network, timeout).
    #[error("API request failed: {0}")]
    Request(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Response { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProviderError {
    /// Whether a caller-side retry could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// TEXT COMPLETION TRAIT
// =============================================================================

/// Provider-neutral async trait for text completion. The analysis pipeline
/// depends only on this seam, which also enables mocking in tests.
#[async_trait::async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send a prompt to the provider and return the generated text. The
    /// returned string is treated as opaque by everything downstream.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails, the provider
    /// responds with a non-success status, or the response is malformed.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
