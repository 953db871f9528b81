//! Artifact name/description text: prompt construction, response parsing,
//! and offline fallbacks.
//!
//! The network call itself lives outside this crate; everything here is
//! pure so it can be unit-tested without a provider.

use serde::{Deserialize, Serialize};

use crate::catalog::Palette;
use crate::prng::SeededRng;
use crate::traits::TraitSet;

/// Name used when the provider gives nothing usable.
pub const FALLBACK_NAME: &str = "Mystic Focus Achievement";
/// Description used when the provider gives nothing usable.
pub const FALLBACK_DESCRIPTION: &str =
    "A unique digital artifact celebrating your focused dedication.";

const TEMPLATE_ADJECTIVES: &[&str] = &[
    "Mystic", "Ethereal", "Radiant", "Cosmic", "Divine", "Sacred", "Ancient", "Luminous",
];
const TEMPLATE_NOUNS: &[&str] = &[
    "Focus",
    "Meditation",
    "Serenity",
    "Clarity",
    "Wisdom",
    "Achievement",
    "Vision",
    "Energy",
];

/// Natural-language metadata attached to an artifact. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDescription {
    pub name: String,
    pub description: String,
}

impl ArtifactDescription {
    /// The fixed literal fallback pair.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Build the text-generation prompt for `traits`.
pub fn build_prompt(traits: &TraitSet, palette: &Palette) -> String {
    format!(
        "Create a mystical and creative NFT name and description based on these visual traits:

Background: {background}
Shape: {shape}
Pattern: {pattern}
Style: {style}
Color Palette: {palette}
Colors: {color1}, {color2}, {accent}

Generate a unique, creative name (2-4 words) and a poetic description (1-2 sentences) that captures the essence of these visual elements. Make it sound magical and achievement-worthy.

Format:
Name: [Creative Name Here]
Description: [Poetic description here]",
        background = traits.background,
        shape = traits.shape,
        pattern = traits.pattern,
        style = traits.style,
        palette = palette.name,
        color1 = traits.color1,
        color2 = traits.color2,
        accent = traits.accent,
    )
}

/// Extract `Name:` / `Description:` values from a provider response.
///
/// Lines are matched case-insensitively by prefix after stripping leading
/// whitespace and markdown markers; the value is everything after the
/// first colon. A field that is missing or empty falls back to its fixed
/// literal, so the result is never empty.
pub fn parse_response(response: &str) -> ArtifactDescription {
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;

    for line in response.lines() {
        let line = line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '-' | '#'));
        let lower = line.to_ascii_lowercase();

        let slot = if lower.starts_with("name:") {
            &mut name
        } else if lower.starts_with("description:") {
            &mut description
        } else {
            continue;
        };

        if let Some((_, value)) = line.split_once(':') {
            let value = value.trim_matches(|c: char| c.is_whitespace() || c == '*');
            if !value.is_empty() {
                *slot = Some(value.to_string());
            }
        }
    }

    ArtifactDescription {
        name: name.unwrap_or_else(|| FALLBACK_NAME.to_string()),
        description: description.unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
    }
}

/// Deterministic template text for when no provider is configured.
///
/// The adjective and noun are picked with a [`SeededRng`] keyed on the trait
/// values, so the same traits always read the same.
pub fn fallback_description(traits: &TraitSet) -> ArtifactDescription {
    let key = format!(
        "{}-{}-{}-{}-{}-{}-{}",
        traits.background,
        traits.shape,
        traits.pattern,
        traits.style,
        traits.color1,
        traits.color2,
        traits.accent
    );
    let mut rng = SeededRng::new(&key);
    let adjective = rng.pick(TEMPLATE_ADJECTIVES).copied().unwrap_or("Mystic");
    let noun = rng.pick(TEMPLATE_NOUNS).copied().unwrap_or("Focus");

    ArtifactDescription {
        name: format!("{adjective} {noun} {}", capitalize(traits.shape.as_str())),
        description: format!(
            "A {} manifestation of concentrated willpower, featuring {} energies and {} patterns that celebrate your dedication to mindful focus.",
            traits.style, traits.background, traits.pattern
        ),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
