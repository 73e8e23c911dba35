use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::TRUST_SEED;

/// Trust score clamped to [0.0, 1.0], derived from the citation graph.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TrustScore(f64);

impl TrustScore {
    /// Neutral trust assigned to unknown or uncited sources.
    pub fn seed() -> Self {
        Self(TRUST_SEED)
    }

    /// Create a new TrustScore, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TrustScore {
    fn default() -> Self {
        Self::seed()
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for TrustScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for f64 {
    fn from(t: TrustScore) -> Self {
        t.0
    }
}
