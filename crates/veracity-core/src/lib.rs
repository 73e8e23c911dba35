//! # veracity-core
//!
//! Foundation crate for the Veracity verification engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{VeracityError, VeracityResult};
pub use models::{
    Claim, Flag, Polarity, TrustScore, Verdict, VerificationRequest, VerificationResult,
};
