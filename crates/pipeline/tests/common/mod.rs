//! Text-generation doubles shared by the pipeline integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use focusnft_textgen::{TextGenError, TextGenerator};

/// Always fails with a 503 from the provider.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, TextGenError> {
        Err(TextGenError::Api {
            status: 503,
            body: "overloaded".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

/// Returns the same reply for every prompt and records each prompt.
pub struct FixedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}
