//! Data model for the verification engine.

mod check_outcome;
mod check_results;
mod citation_edge;
mod claim;
mod document;
mod official_entity;
mod request;
mod trust_score;
mod verification_result;

pub use check_outcome::CheckOutcome;
pub use check_results::{
    CircularReporting, CitationCheck, ImageCheck, NetworkCheck, QuoteVerification, TemporalCheck,
    UnverifiedReason, VerificationChecks,
};
pub use citation_edge::CitationEdge;
pub use claim::{Claim, Polarity};
pub use document::{ImageMetadata, SourceDocument};
pub use official_entity::{OfficialEntity, OfficialSourceRegistry};
pub use request::{QuotedClaim, VerificationRequest};
pub use trust_score::TrustScore;
pub use verification_result::{Flag, Verdict, VerificationResult};
