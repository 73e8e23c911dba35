//! Score fusion: collapses the four check outcomes into one weighted score,
//! a verdict, and the warnings/flags that explain it.
//!
//! Not-applicable checks score a neutral 1.0 and keep their weight.
//! Unavailable checks are excluded entirely and the remaining weights
//! renormalize, so a degraded collaborator shifts confidence to the checks
//! that did run instead of silently dragging the score down.

use tracing::debug;

use veracity_core::config::FusionConfig;
use veracity_core::models::{CheckOutcome, Flag, Verdict, VerificationChecks};

/// Fused judgment over the four checks.
pub(crate) struct Fusion {
    pub overall_score: f64,
    pub verdict: Verdict,
    pub warnings: Vec<String>,
    pub flags: Vec<Flag>,
}

/// Fuse the check outcomes. Callers must guarantee at least one check is
/// available; with every check unavailable there is no score to report.
pub(crate) fn fuse(checks: &VerificationChecks, config: &FusionConfig) -> Fusion {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut include = |score: Option<f64>, weight: f64| {
        if let Some(score) = score {
            weighted_sum += score * weight;
            total_weight += weight;
        }
    };

    include(temporal_score(checks, config), config.temporal_weight);
    include(citation_score(checks), config.citation_weight);
    include(image_score(checks), config.image_weight);
    include(network_score(checks, config), config.network_weight);

    let overall_score = if total_weight > 0.0 {
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let verdict = if overall_score >= config.verified_threshold {
        Verdict::Verified
    } else if overall_score >= config.review_threshold {
        Verdict::NeedsReview
    } else {
        Verdict::Questionable
    };

    let (warnings, flags) = annotate(checks);
    debug!(overall_score, ?verdict, flags = flags.len(), "fusion complete");

    Fusion {
        overall_score,
        verdict,
        warnings,
        flags,
    }
}

/// Sub-score helpers. `None` means the check is unavailable and excluded.
fn temporal_score(checks: &VerificationChecks, config: &FusionConfig) -> Option<f64> {
    match &checks.temporal {
        CheckOutcome::Complete(t) if t.shift_detected => Some(config.shift_penalty_score),
        CheckOutcome::Complete(_) | CheckOutcome::NotApplicable => Some(1.0),
        CheckOutcome::Unavailable { .. } => None,
    }
}

fn citation_score(checks: &VerificationChecks) -> Option<f64> {
    match &checks.citations {
        CheckOutcome::Complete(c) => Some(c.verified_fraction()),
        CheckOutcome::NotApplicable => Some(1.0),
        CheckOutcome::Unavailable { .. } => None,
    }
}

fn image_score(checks: &VerificationChecks) -> Option<f64> {
    match &checks.image {
        CheckOutcome::Complete(i) => Some(i.confidence),
        CheckOutcome::NotApplicable => Some(1.0),
        CheckOutcome::Unavailable { .. } => None,
    }
}

fn network_score(checks: &VerificationChecks, config: &FusionConfig) -> Option<f64> {
    match &checks.network {
        CheckOutcome::Complete(n) => {
            let trust = n.trust_score.value();
            // Circular reporting caps trust regardless of how well-cited
            // the loop's members are.
            if n.circular_reporting.circular {
                Some(trust.min(config.circular_trust_cap))
            } else {
                Some(trust)
            }
        }
        CheckOutcome::NotApplicable => Some(1.0),
        CheckOutcome::Unavailable { .. } => None,
    }
}

/// Derive human-readable warnings and machine-readable flags from the
/// completed checks. Unavailable checks contribute a warning naming the
/// degradation, never a flag.
fn annotate(checks: &VerificationChecks) -> (Vec<String>, Vec<Flag>) {
    let mut warnings = Vec::new();
    let mut flags = Vec::new();

    match &checks.temporal {
        CheckOutcome::Complete(t) if t.shift_detected => {
            warnings.push(format!(
                "Source contradicted its own recent reporting: {} of {} claims in the window oppose another claim",
                t.contradictory_claims, t.total_claims
            ));
            flags.push(Flag::NarrativeShift);
        }
        CheckOutcome::Unavailable { reason } => {
            warnings.push(format!("Temporal check unavailable: {reason}"));
        }
        _ => {}
    }

    match &checks.citations {
        CheckOutcome::Complete(c) => {
            let unverified: Vec<_> = c.quotes.iter().filter(|q| !q.verified).collect();
            for quote in &unverified {
                warnings.push(format!(
                    "Quote attributed to {} could not be confirmed in official sources",
                    quote.attributed_to
                ));
            }
            if !unverified.is_empty() {
                flags.push(Flag::UnverifiedQuote);
            }
        }
        CheckOutcome::Unavailable { reason } => {
            warnings.push(format!("Citation check unavailable: {reason}"));
        }
        CheckOutcome::NotApplicable => {}
    }

    match &checks.image {
        CheckOutcome::Complete(i) => {
            if i.future_dated {
                warnings.push(
                    "Image capture timestamp is after the article's publication date".to_string(),
                );
                flags.push(Flag::FutureDatedImage);
            }
            if i.is_stock_photo {
                warnings.push("Image is served from a stock-photo host".to_string());
                flags.push(Flag::StockPhoto);
            }
            if i.metadata.captured_at.is_none() {
                warnings.push("Image carries no capture metadata".to_string());
                flags.push(Flag::MissingMetadata);
            }
        }
        CheckOutcome::Unavailable { reason } => {
            warnings.push(format!("Image check unavailable: {reason}"));
        }
        CheckOutcome::NotApplicable => {}
    }

    match &checks.network {
        CheckOutcome::Complete(n) if n.circular_reporting.circular => {
            warnings.push(format!(
                "Circular reporting detected: {}",
                n.circular_reporting.chain.join(" -> ")
            ));
            flags.push(Flag::CircularReporting);
        }
        CheckOutcome::Unavailable { reason } => {
            warnings.push(format!("Network check unavailable: {reason}"));
        }
        _ => {}
    }

    (warnings, flags)
}
