use serde::{Deserialize, Serialize};

use super::defaults;

/// Image provenance check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Confidence before penalties. Default: 0.9.
    pub base_confidence: f64,
    /// Penalty for a missing capture timestamp. Default: 0.2.
    pub missing_metadata_penalty: f64,
    /// Penalty for stock-photo hosts. Default: 0.4.
    pub stock_photo_penalty: f64,
    /// Confidence ceiling for future-dated images. Default: 0.2.
    pub future_dated_cap: f64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_confidence: defaults::DEFAULT_IMAGE_BASE_CONFIDENCE,
            missing_metadata_penalty: defaults::DEFAULT_MISSING_METADATA_PENALTY,
            stock_photo_penalty: defaults::DEFAULT_STOCK_PHOTO_PENALTY,
            future_dated_cap: defaults::DEFAULT_FUTURE_DATED_CAP,
        }
    }
}
