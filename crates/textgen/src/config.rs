use std::str::FromStr;
use std::sync::Arc;

use crate::gemini::DEFAULT_GEMINI_API_URL;
use crate::ollama::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};
use crate::{CannedTextGenerator, GeminiApi, OllamaApi, TextGenError, TextGenerator};

/// Which description provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Ollama,
    /// Offline sample responses.
    Canned,
    /// No provider; descriptions come from the deterministic template.
    Template,
}

impl FromStr for ProviderKind {
    type Err = TextGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            "canned" | "mock" => Ok(Self::Canned),
            "template" | "none" => Ok(Self::Template),
            other => Err(TextGenError::NotConfigured(format!(
                "unknown TEXTGEN_PROVIDER '{other}' (expected gemini, ollama, canned, or template)"
            ))),
        }
    }
}

/// Text-generation configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TextGenConfig {
    pub provider: ProviderKind,
    /// Required when `provider` is [`ProviderKind::Gemini`].
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Canned,
            gemini_api_key: None,
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

impl TextGenConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                                |
    /// |--------------------|----------------------------------------|
    /// | `TEXTGEN_PROVIDER` | `canned`                               |
    /// | `GEMINI_API_KEY`   | -- (required for `gemini`)             |
    /// | `GEMINI_API_URL`   | [`DEFAULT_GEMINI_API_URL`]             |
    /// | `OLLAMA_URL`       | `http://localhost:11434`               |
    /// | `OLLAMA_MODEL`     | `llama3`                               |
    pub fn from_env() -> Result<Self, TextGenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values are
    /// treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TextGenError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let provider = match get("TEXTGEN_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => defaults.provider,
        };

        Ok(Self {
            provider,
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_api_url: get("GEMINI_API_URL").unwrap_or(defaults.gemini_api_url),
            ollama_url: get("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: get("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
        })
    }

    /// Build the configured provider. Returns `Ok(None)` for
    /// [`ProviderKind::Template`].
    pub fn build(&self) -> Result<Option<Arc<dyn TextGenerator>>, TextGenError> {
        let generator: Arc<dyn TextGenerator> = match self.provider {
            ProviderKind::Gemini => {
                let api_key = self.gemini_api_key.clone().ok_or_else(|| {
                    TextGenError::NotConfigured(
                        "GEMINI_API_KEY is required when TEXTGEN_PROVIDER=gemini".to_string(),
                    )
                })?;
                Arc::new(GeminiApi::new(self.gemini_api_url.clone(), api_key))
            }
            ProviderKind::Ollama => Arc::new(OllamaApi::new(
                self.ollama_url.clone(),
                self.ollama_model.clone(),
            )),
            ProviderKind::Canned => Arc::new(CannedTextGenerator::new()),
            ProviderKind::Template => return Ok(None),
        };
        Ok(Some(generator))
    }
}
