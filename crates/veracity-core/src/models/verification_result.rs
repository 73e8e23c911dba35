use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::check_results::VerificationChecks;

/// Final categorical judgment derived from the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Fused score ≥ 0.75.
    Verified,
    /// Fused score in [0.5, 0.75).
    NeedsReview,
    /// Fused score < 0.5.
    Questionable,
}

/// Machine-readable tags for downstream filtering and alerting.
/// Independent of warnings — a flag need not have matching prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    FutureDatedImage,
    CircularReporting,
    MissingMetadata,
    UnverifiedQuote,
    NarrativeShift,
    StockPhoto,
}

/// Fused result of one verification request.
///
/// Immutable; owned by the caller after return. A score is only meaningful
/// on a completed request — failures return an error, never a partial score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub id: Uuid,
    pub url: String,
    pub source: String,
    /// Weighted average of the available sub-scores, in [0, 1].
    pub overall_score: f64,
    pub verdict: Verdict,
    /// Per-check sub-results, serialized as `verifications` on the wire.
    #[serde(rename = "verifications")]
    pub checks: VerificationChecks,
    /// Human-readable explanations, one per triggering condition.
    pub warnings: Vec<String>,
    pub flags: Vec<Flag>,
    pub completed_at: DateTime<Utc>,
}
