//! Integration tests for the batch export driver.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{DateTime, Utc};
use focusnft_core::ArtifactMetadata;
use focusnft_pipeline::{DescriptionSource, NftGenerator};
use focusnft_textgen::CannedTextGenerator;
use focusnft_worker::{run_batch, BatchError, SAMPLE_SESSIONS};

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T10:30:00.000Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(ext))
        .collect()
}

// ---------------------------------------------------------------------------
// Test: full sample batch writes every file
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sample_batch_writes_svgs_metadata_and_gallery() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NftGenerator::new(DescriptionSource::Provider(Arc::new(
        CannedTextGenerator::new(),
    )));

    let report = run_batch(&generator, dir.path(), &SAMPLE_SESSIONS, start())
        .await
        .unwrap();

    assert_eq!(report.exported.len(), 6);
    assert_eq!(files_with_extension(dir.path(), ".svg").len(), 6);
    assert_eq!(files_with_extension(dir.path(), ".json").len(), 6);
    assert!(report.gallery_path.exists());
    assert_eq!(report.gallery_path, dir.path().join("gallery.html"));
}

// ---------------------------------------------------------------------------
// Test: metadata points at the written image
// ---------------------------------------------------------------------------

#[tokio::test]
async fn metadata_references_existing_svg() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NftGenerator::new(DescriptionSource::Template);

    let report = run_batch(&generator, dir.path(), &SAMPLE_SESSIONS, start())
        .await
        .unwrap();

    for (item, session) in report.exported.iter().zip(SAMPLE_SESSIONS.iter()) {
        let raw = std::fs::read_to_string(&item.metadata_path).unwrap();
        let metadata: ArtifactMetadata = serde_json::from_str(&raw).unwrap();

        let svg_path = dir.path().join(&metadata.image);
        assert!(svg_path.exists(), "{} missing", metadata.image);
        assert!(std::fs::read_to_string(svg_path).unwrap().starts_with("<svg"));

        assert_eq!(metadata.id, item.artifact.id);
        assert_eq!(metadata.session_type, session.session_type);
        assert_eq!(metadata.session_data.duration, session.duration);
        assert_eq!(metadata.user_id.as_deref(), Some(session.user));
        assert!(metadata.image.ends_with(&format!("_{}.svg", metadata.id)));
    }
}

// ---------------------------------------------------------------------------
// Test: sessions complete an hour apart
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sessions_complete_an_hour_apart() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NftGenerator::new(DescriptionSource::Template);

    let report = run_batch(&generator, dir.path(), &SAMPLE_SESSIONS, start())
        .await
        .unwrap();

    let completed: Vec<&str> = report
        .exported
        .iter()
        .map(|item| item.artifact.session_data.completed_at.as_str())
        .collect();
    assert_eq!(
        completed,
        [
            "2024-01-15T10:30:00.000Z",
            "2024-01-15T09:30:00.000Z",
            "2024-01-15T08:30:00.000Z",
            "2024-01-15T07:30:00.000Z",
            "2024-01-15T06:30:00.000Z",
            "2024-01-15T05:30:00.000Z",
        ]
    );
}

// ---------------------------------------------------------------------------
// Test: gallery totals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gallery_reports_totals() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NftGenerator::new(DescriptionSource::Template);

    let report = run_batch(&generator, dir.path(), &SAMPLE_SESSIONS, start())
        .await
        .unwrap();

    let shapes: HashSet<_> = report
        .exported
        .iter()
        .map(|item| item.artifact.traits.shape)
        .collect();
    assert_eq!(report.stats.artifacts, 6);
    assert_eq!(report.stats.total_minutes, 370);
    assert_eq!(report.stats.shape_variations, shapes.len());

    let html = std::fs::read_to_string(&report.gallery_path).unwrap();
    assert!(html.contains(r#"<div class="stat-number">370</div>"#));
    assert!(html.contains(r#"<div class="stat-number">6</div>"#));
    assert_eq!(html.matches(r#"class="nft-card""#).count(), 6);
    for item in &report.exported {
        assert!(html.contains(&format!(r#"<embed src="{}""#, item.svg_file)));
    }
    assert!(html.contains("120min Ultra Session"));
}

// ---------------------------------------------------------------------------
// Test: output directory handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_output_dir_is_created() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("nested").join("generated-nfts");
    let generator = NftGenerator::new(DescriptionSource::Template);

    run_batch(&generator, &dir, &SAMPLE_SESSIONS[..1], start())
        .await
        .unwrap();

    assert!(dir.join("gallery.html").exists());
    assert_eq!(files_with_extension(&dir, ".svg").len(), 1);
}

#[tokio::test]
async fn unwritable_output_dir_aborts() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();
    let generator = NftGenerator::new(DescriptionSource::Template);

    let result = run_batch(&generator, &blocker.join("out"), &SAMPLE_SESSIONS, start()).await;

    assert_matches!(result, Err(BatchError::Io { .. }));
}

// ---------------------------------------------------------------------------
// Test: ids stay unique across batches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_batches_never_reuse_ids() {
    let dir = tempfile::tempdir().unwrap();
    let generator = NftGenerator::new(DescriptionSource::Template);

    let mut ids = HashSet::new();
    for _ in 0..3 {
        let report = run_batch(&generator, dir.path(), &SAMPLE_SESSIONS, start())
            .await
            .unwrap();
        for item in report.exported {
            assert!(ids.insert(item.artifact.id));
        }
    }
    assert_eq!(files_with_extension(dir.path(), ".svg").len(), 18);
}
