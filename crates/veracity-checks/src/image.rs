//! Image provenance check: stock-photo hosts, missing capture metadata,
//! and future-dated capture timestamps.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use veracity_core::config::ImageConfig;
use veracity_core::models::{CheckOutcome, ImageCheck, VerificationRequest};
use veracity_core::traits::IImageMetadataExtractor;

/// Hosts that serve stock photography rather than original reporting.
const STOCK_PHOTO_DOMAINS: &[&str] = &[
    "shutterstock",
    "gettyimages",
    "istockphoto",
    "stock.adobe",
    "unsplash",
    "pexels",
    "pixabay",
    "freepik",
    "depositphotos",
];

/// Scores how likely an image is contemporaneous and unaltered.
pub struct ImageProvenanceChecker {
    extractor: Arc<dyn IImageMetadataExtractor>,
    config: ImageConfig,
}

impl ImageProvenanceChecker {
    pub fn new(extractor: Arc<dyn IImageMetadataExtractor>, config: ImageConfig) -> Self {
        Self { extractor, config }
    }

    /// Run the check. No image reference skips the check with a neutral
    /// (not penalizing) not-applicable sub-result.
    pub async fn verify(&self, request: &VerificationRequest) -> CheckOutcome<ImageCheck> {
        let Some(image_url) = request.image_url.as_deref() else {
            return CheckOutcome::NotApplicable;
        };

        let metadata = match self.extractor.extract(image_url).await {
            Ok(m) => m,
            Err(e) => {
                warn!(image_url, error = %e, "image metadata extraction failed");
                return CheckOutcome::unavailable(format!("metadata extraction failed: {e}"));
            }
        };

        let mut confidence = self.config.base_confidence;

        let is_stock_photo = is_stock_host(image_url);
        if is_stock_photo {
            confidence -= self.config.stock_photo_penalty;
        }

        // Absent published_at, the comparison point is the verification time.
        let published = request.published_at.unwrap_or_else(Utc::now);
        let mut future_dated = false;
        match metadata.captured_at {
            None => confidence -= self.config.missing_metadata_penalty,
            Some(captured) if captured > published => {
                // A future-dated image can never authentically depict a
                // past event: hard-cap the confidence.
                future_dated = true;
                confidence = confidence.min(self.config.future_dated_cap);
            }
            Some(_) => {}
        }

        let confidence = confidence.clamp(0.0, 1.0);
        debug!(image_url, confidence, is_stock_photo, future_dated, "image check complete");

        CheckOutcome::Complete(ImageCheck {
            confidence,
            is_stock_photo,
            future_dated,
            metadata,
        })
    }
}

fn is_stock_host(image_url: &str) -> bool {
    let lower = image_url.to_lowercase();
    STOCK_PHOTO_DOMAINS.iter().any(|d| lower.contains(d))
}
