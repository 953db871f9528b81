//! Writing artifacts to disk: one SVG and one JSON metadata file each.

use std::path::{Path, PathBuf};

use focusnft_core::naming::{metadata_file_name, svg_file_name};
use focusnft_core::NftArtifact;

use crate::error::BatchError;

/// An artifact that has been written to the output directory.
#[derive(Debug, Clone)]
pub struct ExportedArtifact {
    pub artifact: NftArtifact,
    pub session_type: String,
    /// SVG file name, relative to the output directory.
    pub svg_file: String,
    pub metadata_path: PathBuf,
}

/// Create `dir` (and parents) if it does not exist yet.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), BatchError> {
    if tokio::fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| BatchError::io(dir, e))?;
    tracing::info!(dir = %dir.display(), "Created output directory");
    Ok(())
}

/// Write `artifact`'s image and metadata into `dir`.
///
/// The metadata is the artifact record with `image` replaced by the SVG file
/// name and the session type added, pretty-printed.
pub async fn export_artifact(
    dir: &Path,
    artifact: NftArtifact,
    session_type: &str,
) -> Result<ExportedArtifact, BatchError> {
    let svg_file = svg_file_name(&artifact.name, &artifact.id);
    let svg_path = dir.join(&svg_file);
    tokio::fs::write(&svg_path, artifact.image.as_bytes())
        .await
        .map_err(|e| BatchError::io(&svg_path, e))?;

    let metadata = artifact.to_metadata(&svg_file, session_type);
    let json = serde_json::to_string_pretty(&metadata)?;
    let metadata_path = dir.join(metadata_file_name(&artifact.name, &artifact.id));
    tokio::fs::write(&metadata_path, json)
        .await
        .map_err(|e| BatchError::io(&metadata_path, e))?;

    Ok(ExportedArtifact {
        artifact,
        session_type: session_type.to_string(),
        svg_file,
        metadata_path,
    })
}
