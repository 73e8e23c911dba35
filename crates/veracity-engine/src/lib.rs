//! # veracity-engine
//!
//! Verification orchestrator for the Veracity workspace. Validates a
//! request, runs the temporal, citation, image, and network checks
//! concurrently under one deadline, and fuses the outcomes into an overall
//! score, a verdict, and the warnings and flags that explain them.
//!
//! Collaborators (claim store, document lookup, metadata extractor,
//! citation graph) are injected through the `veracity-core` traits; the
//! engine never touches a concrete backend.

mod fusion;
mod orchestrator;

pub use orchestrator::VerificationOrchestrator;
