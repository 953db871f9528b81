//! Artifact file naming.
//!
//! Exported files are named `{sanitized name}_{id}.{ext}`. The id is unique
//! per artifact, so two artifacts never share a file even when their names
//! sanitize to the same string.

/// Replace every character outside `[A-Za-z0-9]` with `_`.
///
/// # Examples
///
/// ```
/// use focusnft_core::naming::sanitize_name;
///
/// assert_eq!(sanitize_name("Cosmic Serenity Diamond"), "Cosmic_Serenity_Diamond");
/// assert_eq!(sanitize_name("Zen: 100%"), "Zen__100_");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// File stem shared by an artifact's image and metadata files.
pub fn artifact_file_stem(name: &str, id: &str) -> String {
    format!("{}_{id}", sanitize_name(name))
}

/// SVG file name for an artifact.
pub fn svg_file_name(name: &str, id: &str) -> String {
    format!("{}.svg", artifact_file_stem(name, id))
}

/// JSON metadata file name for an artifact.
pub fn metadata_file_name(name: &str, id: &str) -> String {
    format!("{}.json", artifact_file_stem(name, id))
}
