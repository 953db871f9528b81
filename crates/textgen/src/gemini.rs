//! REST client for the Google Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{ensure_success, TextGenError, TextGenerator};

/// Default `generateContent` URL (the API key is appended as `?key=`).
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// HTTP client for the Gemini text API.
pub struct GeminiApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Response body of `generateContent`. Only the fields we read are modelled.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Candidate content, split into parts.
#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part; non-text parts have no `text`.
#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-blank.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

impl GeminiApi {
    /// Create a client for `api_url` authenticated with `api_key`.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Request body for a single-turn text prompt.
    pub fn request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiApi {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body: GenerateContentResponse = response.json().await?;

        let text = body.first_text().ok_or(TextGenError::EmptyResponse)?;
        tracing::debug!(chars = text.len(), "Gemini reply received");
        Ok(text.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
