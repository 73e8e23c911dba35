use serde::{Deserialize, Serialize};

use super::defaults;

/// Official-source citation check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationConfig {
    /// Token-overlap ratio required for a document to confirm a quote.
    /// Default: 0.6.
    pub similarity_threshold: f64,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
