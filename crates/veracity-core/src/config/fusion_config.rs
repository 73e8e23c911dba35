use serde::{Deserialize, Serialize};

use super::defaults;

/// Fusion policy configuration: check weights, penalties, and verdict
/// thresholds. Weights renormalize over available checks, so they need not
/// sum to 1.0 once a check degrades.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Weight of the temporal check. Default: 0.25.
    pub temporal_weight: f64,
    /// Weight of the citation check. Default: 0.25.
    pub citation_weight: f64,
    /// Weight of the image check. Default: 0.20.
    pub image_weight: f64,
    /// Weight of the network check. Default: 0.30.
    pub network_weight: f64,
    /// Temporal sub-score when a narrative shift is detected. Default: 0.3.
    pub shift_penalty_score: f64,
    /// Network sub-score ceiling under circular reporting. Default: 0.3.
    pub circular_trust_cap: f64,
    /// Fused score at or above which the verdict is VERIFIED. Default: 0.75.
    pub verified_threshold: f64,
    /// Fused score at or above which the verdict is NEEDS_REVIEW.
    /// Default: 0.5.
    pub review_threshold: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            temporal_weight: defaults::DEFAULT_TEMPORAL_WEIGHT,
            citation_weight: defaults::DEFAULT_CITATION_WEIGHT,
            image_weight: defaults::DEFAULT_IMAGE_WEIGHT,
            network_weight: defaults::DEFAULT_NETWORK_WEIGHT,
            shift_penalty_score: defaults::DEFAULT_SHIFT_PENALTY_SCORE,
            circular_trust_cap: defaults::DEFAULT_CIRCULAR_TRUST_CAP,
            verified_threshold: defaults::DEFAULT_VERIFIED_THRESHOLD,
            review_threshold: defaults::DEFAULT_REVIEW_THRESHOLD,
        }
    }
}
