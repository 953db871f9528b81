use std::path::PathBuf;

use focusnft_pipeline::PipelineError;
use focusnft_textgen::TextGenError;

/// Errors that abort a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize artifact metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<TextGenError> for BatchError {
    fn from(err: TextGenError) -> Self {
        Self::Config(err.to_string())
    }
}
