use focusnft_core::CoreError;

/// Errors that abort a single artifact's generation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Trait selection failed. No partial artifact is produced.
    #[error("Failed to generate NFT")]
    Generation(#[source] CoreError),
}
