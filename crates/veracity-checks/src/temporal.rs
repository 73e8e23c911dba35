//! Temporal contradiction check: records the request's claims, then scans
//! the source's rolling claim history for opposite-stance claims on the
//! same subject.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use veracity_core::config::TemporalConfig;
use veracity_core::models::{CheckOutcome, Claim, TemporalCheck, VerificationRequest};
use veracity_core::traits::IClaimStore;

use crate::text;

/// Detects narrative shifts in a source's claim history.
pub struct TemporalVerifier {
    store: Arc<dyn IClaimStore>,
    config: TemporalConfig,
}

impl TemporalVerifier {
    pub fn new(store: Arc<dyn IClaimStore>, config: TemporalConfig) -> Self {
        Self { store, config }
    }

    /// Run the check.
    ///
    /// New claims are persisted first, so future checks see them even when
    /// this request later fails fusion. Any `StorageError` degrades the
    /// check to an unavailable sub-result; the request continues.
    pub async fn verify(&self, request: &VerificationRequest) -> CheckOutcome<TemporalCheck> {
        let asserted_at = request.published_at.unwrap_or_else(Utc::now);
        let new_claims: Vec<Claim> = request
            .claims
            .iter()
            .map(|quoted| {
                let normalized = text::normalize(&quoted.text);
                Claim::new(
                    &request.source,
                    &request.url,
                    &normalized,
                    text::subject_key(&normalized),
                    text::detect_polarity(&normalized),
                    asserted_at,
                )
            })
            .collect();

        for claim in &new_claims {
            if let Err(e) = self.store.record(claim).await {
                warn!(source = %request.source, error = %e, "claim store write failed");
                return CheckOutcome::unavailable(format!("claim store write failed: {e}"));
            }
        }

        let window = Duration::days(self.config.window_days);
        let history = match self.store.claims_since(&request.source, window).await {
            Ok(claims) => claims,
            Err(e) => {
                warn!(source = %request.source, error = %e, "claim store read failed");
                return CheckOutcome::unavailable(format!("claim store read failed: {e}"));
            }
        };

        let contradictory = count_contradictory(&history);
        let total = history.len();
        let ratio = if total == 0 {
            0.0
        } else {
            contradictory as f64 / total as f64
        };
        // Minimum sample size guards against false positives on sparse
        // history: 2 contradictions out of 3 claims is not a narrative.
        let shift_detected =
            ratio > self.config.shift_threshold && total >= self.config.min_sample_size;

        debug!(
            source = %request.source,
            total,
            contradictory,
            shift_detected,
            "temporal check complete"
        );

        CheckOutcome::Complete(TemporalCheck {
            total_claims: total,
            contradictory_claims: contradictory,
            shift_detected,
        })
    }
}

/// Claims contradicted by at least one other claim in the window.
fn count_contradictory(claims: &[Claim]) -> usize {
    claims
        .iter()
        .filter(|claim| claims.iter().any(|other| claim.contradicts(other)))
        .count()
}
