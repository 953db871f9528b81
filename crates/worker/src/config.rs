use std::path::PathBuf;

use focusnft_textgen::TextGenConfig;

use crate::error::BatchError;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "generated-nfts";

/// Batch driver configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Where SVG, JSON, and `gallery.html` are written.
    pub output_dir: PathBuf,
    pub textgen: TextGenConfig,
}

impl BatchConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default            |
    /// |--------------------|--------------------|
    /// | `NFT_OUTPUT_DIR`   | `generated-nfts`   |
    /// | `TEXTGEN_PROVIDER` | `canned`           |
    ///
    /// Provider-specific variables are read by [`TextGenConfig::from_env`].
    pub fn from_env() -> Result<Self, BatchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BatchError> {
        let output_dir = lookup("NFT_OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());
        let textgen = TextGenConfig::from_lookup(&lookup)?;

        Ok(Self {
            output_dir: PathBuf::from(output_dir),
            textgen,
        })
    }
}
