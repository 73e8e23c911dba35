//! # veracity-checks
//!
//! The four independent verification checks the orchestrator fuses:
//! 1. **Temporal** — contradiction/narrative-shift detection over a
//!    source's rolling claim history.
//! 2. **Citation** — quote confirmation against official-entity trusted
//!    domains.
//! 3. **Image** — provenance signals: stock-photo hosts, missing or
//!    future-dated capture timestamps.
//! 4. **Network** — citation-graph trust and circular-reporting detection.
//!
//! Every check degrades to an `Unavailable` sub-result on collaborator
//! failure instead of aborting the request, and never fabricates a score.

pub mod citation;
pub mod image;
pub mod network;
pub mod temporal;
pub mod text;

pub use citation::CitationVerifier;
pub use image::ImageProvenanceChecker;
pub use network::NetworkVerifier;
pub use temporal::TemporalVerifier;
