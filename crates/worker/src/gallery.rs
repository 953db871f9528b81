//! Static HTML gallery of an exported batch.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::BatchError;
use crate::export::ExportedArtifact;

/// File name of the gallery page inside the output directory.
pub const GALLERY_FILE_NAME: &str = "gallery.html";

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            margin: 0;
            padding: 20px;
            min-height: 100vh;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            padding: 30px;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
        }
        h1 { text-align: center; color: #333; margin-bottom: 30px; font-size: 2.5em; }
        .subtitle { text-align: center; color: #666; margin-bottom: 40px; font-size: 1.2em; }
        .gallery {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
            gap: 30px;
        }
        .nft-card {
            border: 1px solid #e0e0e0;
            border-radius: 15px;
            overflow: hidden;
            box-shadow: 0 10px 25px rgba(0,0,0,0.08);
            transition: all 0.3s ease;
        }
        .nft-card:hover { transform: translateY(-5px); box-shadow: 0 20px 40px rgba(0,0,0,0.15); }
        .nft-image { width: 100%; height: 300px; object-fit: contain; background: #f8f9fa; }
        .nft-info { padding: 20px; }
        .nft-name { font-size: 1.3em; font-weight: bold; margin-bottom: 10px; color: #333; }
        .nft-description { color: #666; line-height: 1.5; margin-bottom: 15px; }
        .nft-traits { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 15px; }
        .trait {
            background: #f1f3f4;
            color: #333;
            padding: 4px 8px;
            border-radius: 15px;
            font-size: 0.85em;
        }
        .nft-session {
            background: linear-gradient(45deg, #667eea, #764ba2);
            color: white;
            padding: 8px 15px;
            border-radius: 20px;
            font-size: 0.9em;
            display: inline-block;
        }
        .stats { text-align: center; margin: 30px 0; padding: 20px; background: #f8f9fa; border-radius: 10px; }
        .stat { display: inline-block; margin: 0 20px; }
        .stat-number { font-size: 2em; font-weight: bold; color: #667eea; }
        .stat-label { color: #666; font-size: 0.9em; }
"#;

/// Summary numbers shown at the top of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub artifacts: usize,
    pub total_minutes: u64,
    pub shape_variations: usize,
}

impl GalleryStats {
    pub fn from_exported(items: &[ExportedArtifact]) -> Self {
        let shapes: HashSet<_> = items.iter().map(|item| item.artifact.traits.shape).collect();
        Self {
            artifacts: items.len(),
            total_minutes: items
                .iter()
                .map(|item| u64::from(item.artifact.session_data.duration))
                .sum(),
            shape_variations: shapes.len(),
        }
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the gallery page for `items`.
pub fn render_gallery(items: &[ExportedArtifact]) -> String {
    let stats = GalleryStats::from_exported(items);

    let mut cards = String::new();
    for item in items {
        let nft = &item.artifact;
        // Writing into a String cannot fail.
        let _ = write!(
            cards,
            r#"
            <div class="nft-card">
                <embed src="{src}" class="nft-image" type="image/svg+xml">
                <div class="nft-info">
                    <div class="nft-name">{name}</div>
                    <div class="nft-description">{description}</div>
                    <div class="nft-traits">
                        <span class="trait">{style} Style</span>
                        <span class="trait">{shape} Shape</span>
                        <span class="trait">{pattern} Pattern</span>
                        <span class="trait">{palette} Palette</span>
                    </div>
                    <div class="nft-session">{duration}min {session_type}</div>
                </div>
            </div>"#,
            src = escape_html(&item.svg_file),
            name = escape_html(&nft.name),
            description = escape_html(&nft.description),
            style = nft.traits.style,
            shape = nft.traits.shape,
            pattern = nft.traits.pattern,
            palette = escape_html(&nft.palette),
            duration = nft.session_data.duration,
            session_type = escape_html(&item.session_type),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Focus NFT Gallery</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <h1>Focus Achievement NFT Gallery</h1>
        <p class="subtitle">Unique digital artifacts celebrating focused productivity sessions</p>

        <div class="stats">
            <div class="stat">
                <div class="stat-number">{artifacts}</div>
                <div class="stat-label">Unique NFTs</div>
            </div>
            <div class="stat">
                <div class="stat-number">{total_minutes}</div>
                <div class="stat-label">Total Focus Minutes</div>
            </div>
            <div class="stat">
                <div class="stat-number">{shape_variations}</div>
                <div class="stat-label">Shape Variations</div>
            </div>
        </div>

        <div class="gallery">{cards}
        </div>

        <div style="text-align: center; margin-top: 40px; color: #666;">
            <p>Each NFT represents a successful focus session completion</p>
        </div>
    </div>
</body>
</html>
"#,
        artifacts = stats.artifacts,
        total_minutes = stats.total_minutes,
        shape_variations = stats.shape_variations,
    )
}

/// Render and write `gallery.html` into `dir`.
pub async fn write_gallery(dir: &Path, items: &[ExportedArtifact]) -> Result<PathBuf, BatchError> {
    let path = dir.join(GALLERY_FILE_NAME);
    tokio::fs::write(&path, render_gallery(items))
        .await
        .map_err(|e| BatchError::io(&path, e))?;
    Ok(path)
}
