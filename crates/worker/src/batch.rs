//! The batch driver: mint, export, and gallery a list of sessions.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use focusnft_pipeline::{GenerationRequest, NftGenerator};

use crate::error::BatchError;
use crate::export::{ensure_output_dir, export_artifact, ExportedArtifact};
use crate::gallery::{write_gallery, GalleryStats};
use crate::sessions::SessionDescriptor;

/// Outcome of a completed batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub exported: Vec<ExportedArtifact>,
    pub gallery_path: PathBuf,
    pub stats: GalleryStats,
}

/// Completion time of the `index`-th session: `index` hours before
/// `started_at`, in `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
pub fn session_completed_at(started_at: DateTime<Utc>, index: usize) -> String {
    (started_at - Duration::hours(index as i64)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate, export, and gallery every session in order.
///
/// Sessions run one after another. The first failure aborts the run; files
/// already written are left in place.
pub async fn run_batch(
    generator: &NftGenerator,
    output_dir: &Path,
    sessions: &[SessionDescriptor],
    started_at: DateTime<Utc>,
) -> Result<BatchReport, BatchError> {
    ensure_output_dir(output_dir).await?;

    let mut exported = Vec::with_capacity(sessions.len());
    for (i, session) in sessions.iter().enumerate() {
        tracing::info!(
            index = i + 1,
            total = sessions.len(),
            session_type = session.session_type,
            user = session.user,
            "Generating NFT",
        );

        let request = GenerationRequest::new(session.duration, session_completed_at(started_at, i))
            .with_user(session.user);
        let artifact = generator.generate(&request).await?;
        let item = export_artifact(output_dir, artifact, session.session_type).await?;

        tracing::info!(
            name = %item.artifact.name,
            svg = %item.svg_file,
            metadata = %item.metadata_path.display(),
            style = %item.artifact.traits.style,
            shape = %item.artifact.traits.shape,
            pattern = %item.artifact.traits.pattern,
            duration = session.duration,
            "Exported NFT",
        );
        exported.push(item);
    }

    let gallery_path = write_gallery(output_dir, &exported).await?;
    let stats = GalleryStats::from_exported(&exported);

    tracing::info!(
        dir = %output_dir.display(),
        gallery = %gallery_path.display(),
        artifacts = stats.artifacts,
        total_minutes = stats.total_minutes,
        shape_variations = stats.shape_variations,
        "Batch complete",
    );

    Ok(BatchReport {
        output_dir: output_dir.to_path_buf(),
        exported,
        gallery_path,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn first_session_completes_at_start() {
        assert_eq!(session_completed_at(start(), 0), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn later_sessions_step_back_an_hour_each() {
        assert_eq!(session_completed_at(start(), 1), "2024-01-15T09:30:00.000Z");
        assert_eq!(session_completed_at(start(), 11), "2024-01-14T23:30:00.000Z");
    }

    #[test]
    fn milliseconds_are_kept() {
        let start = DateTime::parse_from_rfc3339("2024-01-15T10:30:00.123Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(session_completed_at(start, 2), "2024-01-15T08:30:00.123Z");
    }
}
