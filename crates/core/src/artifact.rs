//! The assembled NFT record, its persisted metadata form, and the seed and
//! identifier rules that tie it to a focus session.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::traits::TraitSet;
use crate::types::{DurationMinutes, UnixMillis};

/// User segment of the seed when the session has no owner.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Prefix of every artifact identifier.
pub const ID_PREFIX: &str = "nft-";

/// Length of the random base36 suffix of an identifier.
pub const ID_SUFFIX_LENGTH: usize = 9;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The focus session an artifact was minted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub duration: DurationMinutes,
    /// Completion time exactly as supplied by the caller. Opaque: it is
    /// only ever used as seed text.
    pub completed_at: String,
}

/// A generated artifact. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftArtifact {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Complete SVG document.
    pub image: String,
    pub traits: TraitSet,
    /// Name of the palette the trait colors were drawn from.
    pub palette: String,
    pub timestamp: UnixMillis,
    pub session_data: SessionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// On-disk JSON form of an artifact: the image is a file name rather than
/// the inline document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    /// File name of the SVG image, relative to the metadata file.
    pub image: String,
    pub traits: TraitSet,
    pub palette: String,
    pub timestamp: UnixMillis,
    pub session_data: SessionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub session_type: String,
}

impl NftArtifact {
    /// Metadata for persisting this artifact next to `image_file`.
    pub fn to_metadata(&self, image_file: &str, session_type: &str) -> ArtifactMetadata {
        ArtifactMetadata {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            image: image_file.to_string(),
            traits: self.traits.clone(),
            palette: self.palette.clone(),
            timestamp: self.timestamp,
            session_data: self.session_data.clone(),
            user_id: self.user_id.clone(),
            session_type: session_type.to_string(),
        }
    }
}

/// Compose the trait seed for a session:
/// `"{user_id or 'anonymous'}-{completed_at}-{duration}"`.
///
/// `completed_at` goes in verbatim, whatever its format. Durations are whole
/// minutes and print without a fractional part.
pub fn compose_seed(user_id: Option<&str>, completed_at: &str, duration: DurationMinutes) -> String {
    let user = user_id.unwrap_or(ANONYMOUS_USER);
    format!("{user}-{completed_at}-{duration}")
}

/// Generate an artifact identifier: `nft-{millis}-{9 base36 chars}`.
pub fn generate_artifact_id<R: Rng + ?Sized>(now_millis: UnixMillis, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LENGTH)
        .map(|_| char::from(BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())]))
        .collect();
    format!("{ID_PREFIX}{now_millis}-{suffix}")
}
