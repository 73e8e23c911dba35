use serde::{Deserialize, Serialize};

use super::citation_config::CitationConfig;
use super::defaults;
use super::fusion_config::FusionConfig;
use super::image_config::ImageConfig;
use super::temporal_config::TemporalConfig;

/// Top-level engine configuration grouping the per-check configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub temporal: TemporalConfig,
    pub citation: CitationConfig,
    pub image: ImageConfig,
    pub fusion: FusionConfig,
    /// Overall request deadline (seconds). Default: 10.
    pub request_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            temporal: TemporalConfig::default(),
            citation: CitationConfig::default(),
            image: ImageConfig::default(),
            fusion: FusionConfig::default(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Default config with an explicit deadline.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}
