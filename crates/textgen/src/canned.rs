//! Offline provider that answers with fixed sample responses.
//!
//! Used for demos and batch runs without network access. Every response is
//! already in the `Name:` / `Description:` format the pipeline parses.

use async_trait::async_trait;
use rand::Rng;

use crate::{TextGenError, TextGenerator};

/// Sample replies, one picked per call.
pub const CANNED_RESPONSES: &[&str] = &[
    "Name: Cosmic Serenity Diamond\nDescription: A mystical manifestation of concentrated willpower, featuring cosmic energies and geometric patterns that celebrate your dedication to mindful focus.",
    "Name: Ethereal Focus Hexagon\nDescription: An ethereal embodiment of deep focus, with crystalline structures and flowing energy that radiates the power of sustained attention.",
    "Name: Mystic Clarity Spiral\nDescription: A sacred symbol of meditation mastery, radiating divine light through complex geometries born from your focused dedication.",
    "Name: Divine Meditation Star\nDescription: A luminous achievement token celebrating your journey into mindful concentration, where willpower meets artistic expression.",
    "Name: Sacred Wisdom Circle\nDescription: A transcendent artifact of mental clarity, born from pure dedication and the disciplined pursuit of focused productivity.",
    "Name: Radiant Focus Mandala\nDescription: An ancient symbol of inner peace transformed through modern achievement, celebrating your mastery of distraction and embrace of flow.",
    "Name: Celestial Achievement Wave\nDescription: A flowing testament to your mental discipline, where ethereal waves carry the essence of your focused energy into digital permanence.",
];

/// Provider that ignores the prompt and returns a random canned reply.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedTextGenerator;

impl CannedTextGenerator {
    pub fn new() -> Self {
        Self
    }

    fn pick(&self) -> &'static str {
        let index = rand::rng().random_range(0..CANNED_RESPONSES.len());
        CANNED_RESPONSES[index]
    }
}

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        tracing::debug!(prompt_chars = prompt.len(), "Serving canned description");
        Ok(self.pick().to_string())
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}
