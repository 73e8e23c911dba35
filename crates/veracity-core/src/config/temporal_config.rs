use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal contradiction check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Rolling claim-history window (days). Default: 30.
    pub window_days: i64,
    /// Contradiction ratio above which a shift is reported. Default: 0.15.
    pub shift_threshold: f64,
    /// Minimum claims in the window before a shift can be reported.
    /// Default: 5.
    pub min_sample_size: usize,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_TEMPORAL_WINDOW_DAYS,
            shift_threshold: defaults::DEFAULT_SHIFT_THRESHOLD,
            min_sample_size: defaults::DEFAULT_MIN_SAMPLE_SIZE,
        }
    }
}
