//! NFT generation pipeline.
//!
//! Seed -> traits -> {description, SVG} -> [`NftArtifact`]. The only
//! suspension point is the text-generation call inside
//! [`generate_description`], whose failures never escape it.
//!
//! [`NftArtifact`]: focusnft_core::NftArtifact

pub mod assembler;
pub mod describe;
pub mod error;

pub use assembler::{generate_focus_nft, GenerationRequest, NftGenerator};
pub use describe::{generate_description, DescriptionSource};
pub use error::PipelineError;
