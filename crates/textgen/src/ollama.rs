//! REST client for a local Ollama server.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{ensure_success, TextGenError, TextGenerator};

/// Default Ollama base URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Default model name.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// HTTP client for Ollama's non-streaming `/api/generate` endpoint.
pub struct OllamaApi {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

/// Response body of a non-streaming `/api/generate` call.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

impl OllamaApi {
    /// * `base_url` - e.g. `http://localhost:11434` (no trailing path).
    /// * `model`    - model tag to run, e.g. `llama3`.
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Request body for a single non-streaming completion.
    pub fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaApi {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body: GenerateResponse = response.json().await?;

        if body.response.trim().is_empty() {
            return Err(TextGenError::EmptyResponse);
        }
        tracing::debug!(model = %self.model, chars = body.response.len(), "Ollama reply received");
        Ok(body.response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}
