//! Pure domain logic for focus-session NFTs.
//!
//! Seeded trait selection, SVG composition, description text handling, and
//! the artifact record. No I/O and no network: the text-generation provider
//! lives in `focusnft-textgen`, orchestration in `focusnft-pipeline`.

pub mod artifact;
pub mod catalog;
pub mod description;
pub mod error;
pub mod naming;
pub mod prng;
pub mod svg;
pub mod traits;
pub mod types;

pub use artifact::{ArtifactMetadata, NftArtifact, SessionData};
pub use catalog::{Background, HexColor, Palette, Pattern, Shape, Style, PALETTES};
pub use description::ArtifactDescription;
pub use error::CoreError;
pub use traits::{select_traits, select_traits_with_palette, TraitSelection, TraitSet};
