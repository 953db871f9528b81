//! `focusnft-worker` library crate.
//!
//! The batch export driver: mints an artifact for each sample session,
//! writes its SVG and JSON metadata, and renders an HTML gallery. The
//! binary entrypoint lives in `main.rs`.

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod gallery;
pub mod sessions;

pub use batch::{run_batch, BatchReport};
pub use config::BatchConfig;
pub use error::BatchError;
pub use sessions::{SessionDescriptor, SAMPLE_SESSIONS};
