use serde::{Deserialize, Serialize};

use super::check_outcome::CheckOutcome;
use super::document::ImageMetadata;
use super::trust_score::TrustScore;

/// Temporal contradiction check over a source's recent claim history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalCheck {
    /// Claims from the source inside the rolling window, new ones included.
    pub total_claims: usize,
    /// Claims contradicted by at least one other claim in the window.
    pub contradictory_claims: usize,
    /// True iff the contradiction ratio exceeds the threshold AND the
    /// sample is large enough (guards against sparse-history false positives).
    pub shift_detected: bool,
}

/// Why a quote could not be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnverifiedReason {
    /// The attributed name matched no registry entity.
    UnknownEntity,
    /// Entity matched, but no trusted document confirmed the quote.
    NotFoundInOfficialSource,
    /// Document retrieval failed; treated as unverified, never fatal.
    LookupFailed,
}

/// Verification outcome for one attributed quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteVerification {
    pub quote: String,
    pub attributed_to: String,
    pub verified: bool,
    #[serde(default)]
    pub reason: Option<UnverifiedReason>,
}

/// Official-source citation check across all attributed quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationCheck {
    pub quotes: Vec<QuoteVerification>,
}

impl CitationCheck {
    /// Fraction of quotes verified; 1.0 when there are none.
    pub fn verified_fraction(&self) -> f64 {
        if self.quotes.is_empty() {
            return 1.0;
        }
        let verified = self.quotes.iter().filter(|q| q.verified).count();
        verified as f64 / self.quotes.len() as f64
    }
}

/// Image provenance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCheck {
    /// How likely the image is contemporaneous and unaltered, in [0, 1].
    pub confidence: f64,
    pub is_stock_photo: bool,
    /// Capture timestamp strictly after the article's publication date.
    /// A future-dated image can never authentically depict a past event.
    pub future_dated: bool,
    pub metadata: ImageMetadata,
}

/// Cycle found in the citation network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularReporting {
    pub circular: bool,
    /// First cycle found, in order, starting and ending at the requesting
    /// source. Empty when no cycle exists.
    #[serde(default)]
    pub chain: Vec<String>,
}

impl CircularReporting {
    pub fn none() -> Self {
        Self {
            circular: false,
            chain: Vec::new(),
        }
    }
}

/// Citation-network trust check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkCheck {
    pub trust_score: TrustScore,
    pub circular_reporting: CircularReporting,
}

/// The four per-check sub-results of a verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationChecks {
    pub temporal: CheckOutcome<TemporalCheck>,
    pub citations: CheckOutcome<CitationCheck>,
    pub image: CheckOutcome<ImageCheck>,
    pub network: CheckOutcome<NetworkCheck>,
}
