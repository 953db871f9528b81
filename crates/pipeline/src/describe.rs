//! Description generation with graceful degradation.

use std::sync::Arc;

use focusnft_core::description::{build_prompt, fallback_description, parse_response};
use focusnft_core::{ArtifactDescription, Palette, TraitSet};
use focusnft_textgen::TextGenerator;

/// Where artifact names and descriptions come from.
#[derive(Clone)]
pub enum DescriptionSource {
    /// Ask a text-generation provider, falling back to fixed text on failure.
    Provider(Arc<dyn TextGenerator>),
    /// No provider: deterministic template text derived from the traits.
    Template,
}

impl DescriptionSource {
    /// `Provider` when a generator is given, otherwise `Template`.
    pub fn from_provider(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        match generator {
            Some(generator) => Self::Provider(generator),
            None => Self::Template,
        }
    }

    pub fn provider(&self) -> Option<&dyn TextGenerator> {
        match self {
            Self::Provider(generator) => Some(generator.as_ref()),
            Self::Template => None,
        }
    }
}

impl std::fmt::Debug for DescriptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(generator) => f
                .debug_tuple("Provider")
                .field(&generator.provider_name())
                .finish(),
            Self::Template => f.write_str("Template"),
        }
    }
}

/// Ask `generator` for a name and description of `traits`.
///
/// Makes exactly one call. A failed call, or a reply that does not parse,
/// yields the fixed fallback text; the error is logged and never returned.
pub async fn generate_description(
    generator: &dyn TextGenerator,
    traits: &TraitSet,
    palette: &Palette,
) -> ArtifactDescription {
    let prompt = build_prompt(traits, palette);

    match generator.generate(&prompt).await {
        Ok(reply) => {
            let description = parse_response(&reply);
            tracing::debug!(
                provider = generator.provider_name(),
                name = %description.name,
                "Parsed generated description",
            );
            description
        }
        Err(e) => {
            tracing::warn!(
                provider = generator.provider_name(),
                error = %e,
                "Failed to generate AI description; using fallback",
            );
            ArtifactDescription::fallback()
        }
    }
}

/// Describe `traits` from `source`.
pub async fn describe(
    source: Option<&dyn TextGenerator>,
    traits: &TraitSet,
    palette: &Palette,
) -> ArtifactDescription {
    match source {
        Some(generator) => generate_description(generator, traits, palette).await,
        None => fallback_description(traits),
    }
}
