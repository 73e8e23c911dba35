use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document retrieved from an official entity's trusted domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub url: String,
    /// Extracted page text, used for quote matching.
    pub text: String,
}

/// Metadata extracted from an image reference.
///
/// Pixel-level forensics are out of scope; the engine only reasons about
/// the metadata signals the extractor surfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Capture timestamp, if the image carries one.
    pub captured_at: Option<DateTime<Utc>>,
    /// Camera make/model tag.
    pub camera: Option<String>,
    /// Editing software tag.
    pub software: Option<String>,
}
