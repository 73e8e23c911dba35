use async_trait::async_trait;

use crate::errors::VeracityResult;
use crate::models::ImageMetadata;

/// Extracts capture timestamp and camera/software tags from an image
/// reference. Pixel-level forensics belong to the implementation, not to
/// the engine.
#[async_trait]
pub trait IImageMetadataExtractor: Send + Sync {
    async fn extract(&self, image_url: &str) -> VeracityResult<ImageMetadata>;
}
