//! Text-generation providers for artifact names and descriptions.
//!
//! The pipeline only needs a one-shot `prompt -> text` call, expressed by
//! the [`TextGenerator`] trait. Implementations:
//!
//! - [`GeminiApi`] -- Google Gemini `generateContent` REST endpoint.
//! - [`OllamaApi`] -- a local Ollama server's `/api/generate` endpoint.
//! - [`CannedTextGenerator`] -- offline, returns fixed sample responses.
//!
//! [`TextGenConfig`] selects and builds one from environment variables.

pub mod canned;
pub mod config;
pub mod gemini;
pub mod ollama;

use async_trait::async_trait;

pub use canned::CannedTextGenerator;
pub use config::{ProviderKind, TextGenConfig};
pub use gemini::GeminiApi;
pub use ollama::OllamaApi;

/// A one-shot text-generation provider.
///
/// Implementations make a single attempt per call; retries and fallbacks
/// are the caller's decision.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the provider's complete text reply.
    async fn generate(&self, prompt: &str) -> Result<String, TextGenError>;

    /// Short provider name for logs.
    fn provider_name(&self) -> &'static str;
}

/// Errors from the text-generation layer.
#[derive(Debug, thiserror::Error)]
pub enum TextGenError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered but the reply carried no text.
    #[error("Provider returned no text")]
    EmptyResponse,

    /// Required configuration is missing or invalid.
    #[error("Text generation not configured: {0}")]
    NotConfigured(String),
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`TextGenError::Api`] carrying the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, TextGenError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(TextGenError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
