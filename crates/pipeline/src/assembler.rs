//! NFT assembly: one completed focus session in, one artifact out.

use focusnft_core::artifact::{compose_seed, generate_artifact_id};
use focusnft_core::svg::render_image;
use focusnft_core::types::DurationMinutes;
use focusnft_core::{select_traits_with_palette, CoreError, NftArtifact, SessionData};
use focusnft_textgen::TextGenerator;

use crate::describe::{describe, DescriptionSource};
use crate::error::PipelineError;

/// A completed focus session to mint an artifact for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub duration_minutes: DurationMinutes,
    /// ISO-8601 completion time. Not parsed; used verbatim in the seed.
    pub completed_at: String,
    pub user_id: Option<String>,
}

impl GenerationRequest {
    pub fn new(duration_minutes: DurationMinutes, completed_at: impl Into<String>) -> Self {
        Self {
            duration_minutes,
            completed_at: completed_at.into(),
            user_id: None,
        }
    }

    /// Attach the owning user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The trait seed for this session.
    pub fn seed(&self) -> String {
        compose_seed(
            self.user_id.as_deref(),
            &self.completed_at,
            self.duration_minutes,
        )
    }
}

/// Reusable artifact generator bound to a description source.
#[derive(Debug, Clone)]
pub struct NftGenerator {
    source: DescriptionSource,
}

impl NftGenerator {
    pub fn new(source: DescriptionSource) -> Self {
        Self { source }
    }

    /// Generate the artifact for `request`.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<NftArtifact, PipelineError> {
        assemble(self.source.provider(), request).await
    }
}

/// Generate an artifact for a completed focus session, describing it with
/// `generator`.
pub async fn generate_focus_nft(
    generator: &dyn TextGenerator,
    duration_minutes: DurationMinutes,
    completed_at: &str,
    user_id: Option<&str>,
) -> Result<NftArtifact, PipelineError> {
    let mut request = GenerationRequest::new(duration_minutes, completed_at);
    request.user_id = user_id.map(str::to_string);
    assemble(Some(generator), &request).await
}

async fn assemble(
    generator: Option<&dyn TextGenerator>,
    request: &GenerationRequest,
) -> Result<NftArtifact, PipelineError> {
    let seed = request.seed();
    let selection = select_traits_with_palette(&seed).map_err(generation_failed)?;

    let description = describe(generator, &selection.traits, selection.palette).await;

    let image = render_image(&selection.traits);

    let timestamp = chrono::Utc::now().timestamp_millis();
    let id = generate_artifact_id(timestamp, &mut rand::rng());

    tracing::info!(
        id = %id,
        name = %description.name,
        shape = %selection.traits.shape,
        style = %selection.traits.style,
        palette = selection.palette.name,
        "Generated NFT",
    );

    Ok(NftArtifact {
        id,
        name: description.name,
        description: description.description,
        image,
        traits: selection.traits,
        palette: selection.palette.name.to_string(),
        timestamp,
        session_data: SessionData {
            duration: request.duration_minutes,
            completed_at: request.completed_at.clone(),
        },
        user_id: request.user_id.clone(),
    })
}

fn generation_failed(error: CoreError) -> PipelineError {
    tracing::error!(error = %error, "Error generating NFT");
    PipelineError::Generation(error)
}
