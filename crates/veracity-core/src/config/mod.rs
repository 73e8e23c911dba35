//! Engine configuration. All structs deserialize with `#[serde(default)]`
//! so a partial config file fills in the documented defaults.

pub mod defaults;

mod citation_config;
mod engine_config;
mod fusion_config;
mod image_config;
mod temporal_config;

pub use citation_config::CitationConfig;
pub use engine_config::EngineConfig;
pub use fusion_config::FusionConfig;
pub use image_config::ImageConfig;
pub use temporal_config::TemporalConfig;
