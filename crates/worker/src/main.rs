//! `focusnft-batch` -- generate the sample NFT batch and its gallery.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default          | Description                              |
//! |--------------------|----------|------------------|------------------------------------------|
//! | `NFT_OUTPUT_DIR`   | no       | `generated-nfts` | Directory for SVG, JSON, and gallery     |
//! | `TEXTGEN_PROVIDER` | no       | `canned`         | `gemini`, `ollama`, `canned`, `template` |
//! | `GEMINI_API_KEY`   | gemini   | --               | Gemini API key                           |
//! | `OLLAMA_URL`       | no       | `http://localhost:11434` | Ollama server                    |
//! | `OLLAMA_MODEL`     | no       | `llama3`         | Ollama model name                        |

use std::error::Error as _;

use focusnft_pipeline::{DescriptionSource, NftGenerator};
use focusnft_worker::{run_batch, BatchConfig, BatchError, SAMPLE_SESSIONS};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "focusnft_worker=info,focusnft_pipeline=info,focusnft_textgen=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        let mut chain = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            chain.push_str(": ");
            chain.push_str(&cause.to_string());
            source = cause.source();
        }
        tracing::error!(error = %chain, "Batch generation failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BatchError> {
    let config = BatchConfig::from_env()?;
    let source = DescriptionSource::from_provider(config.textgen.build()?);

    tracing::info!(
        provider = ?config.textgen.provider,
        output_dir = %config.output_dir.display(),
        sessions = SAMPLE_SESSIONS.len(),
        "Starting focusnft-batch",
    );

    let generator = NftGenerator::new(source);
    let report = run_batch(
        &generator,
        &config.output_dir,
        &SAMPLE_SESSIONS,
        chrono::Utc::now(),
    )
    .await?;

    for item in &report.exported {
        tracing::info!(
            name = %item.artifact.name,
            svg = %item.svg_file,
            "Generated NFT",
        );
    }
    tracing::info!(
        gallery = %report.gallery_path.display(),
        "Open the gallery in a browser to view all NFTs",
    );
    Ok(())
}
