//! Request orchestration: validate, fan out the four checks concurrently,
//! enforce the deadline, fuse.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use veracity_core::config::EngineConfig;
use veracity_core::errors::{VeracityError, VeracityResult};
use veracity_core::models::{
    CheckOutcome, OfficialSourceRegistry, VerificationChecks, VerificationRequest,
    VerificationResult,
};
use veracity_core::traits::{
    ICitationGraph, IClaimStore, IDocumentLookup, IImageMetadataExtractor,
};

use veracity_checks::{
    CitationVerifier, ImageProvenanceChecker, NetworkVerifier, TemporalVerifier,
};

use crate::fusion;

/// Runs verification requests end to end.
///
/// Holds the four verifiers over injected collaborators; construction wires
/// the object graph once, requests only read it. `verify` takes `&self` and
/// is safe to call from many tasks concurrently.
pub struct VerificationOrchestrator {
    temporal: TemporalVerifier,
    citation: CitationVerifier,
    image: ImageProvenanceChecker,
    network: NetworkVerifier,
    config: EngineConfig,
}

impl VerificationOrchestrator {
    pub fn new(
        store: Arc<dyn IClaimStore>,
        registry: Arc<OfficialSourceRegistry>,
        lookup: Arc<dyn IDocumentLookup>,
        extractor: Arc<dyn IImageMetadataExtractor>,
        graph: Arc<dyn ICitationGraph>,
        config: EngineConfig,
    ) -> Self {
        Self {
            temporal: TemporalVerifier::new(store, config.temporal.clone()),
            citation: CitationVerifier::new(registry, lookup, config.citation.clone()),
            image: ImageProvenanceChecker::new(extractor, config.image.clone()),
            network: NetworkVerifier::new(graph),
            config,
        }
    }

    /// Verify one article.
    ///
    /// The four checks run concurrently under a single request deadline.
    /// Individual check failures degrade to unavailable sub-results and the
    /// request continues; only an invalid request, a missed deadline, or all
    /// four checks degrading at once fail the request. A failed request
    /// never returns a partial score.
    pub async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> VeracityResult<VerificationResult> {
        request.validate()?;
        info!(url = %request.url, source = %request.source, "verification started");

        let deadline = Duration::from_secs(self.config.request_timeout_secs);
        let checks = tokio::time::timeout(deadline, self.run_checks(request))
            .await
            .map_err(|_| {
                warn!(url = %request.url, "verification exceeded deadline");
                VeracityError::Timeout {
                    timeout_secs: self.config.request_timeout_secs,
                }
            })?;

        let degraded = unavailable_reasons(&checks);
        if degraded.len() == 4 {
            warn!(url = %request.url, "all checks unavailable");
            return Err(VeracityError::AllChecksUnavailable {
                reasons: degraded.join("; "),
            });
        }

        let fused = fusion::fuse(&checks, &self.config.fusion);
        info!(
            url = %request.url,
            score = fused.overall_score,
            verdict = ?fused.verdict,
            warnings = fused.warnings.len(),
            "verification completed"
        );

        Ok(VerificationResult {
            id: Uuid::new_v4(),
            url: request.url.clone(),
            source: request.source.clone(),
            overall_score: fused.overall_score,
            verdict: fused.verdict,
            checks,
            warnings: fused.warnings,
            flags: fused.flags,
            completed_at: Utc::now(),
        })
    }

    async fn run_checks(&self, request: &VerificationRequest) -> VerificationChecks {
        let (temporal, citations, image) = tokio::join!(
            self.temporal.verify(request),
            self.citation.verify(request),
            self.image.verify(request),
        );
        // The graph is in-process; no await point to join on.
        let network = self.network.verify(&request.source);
        VerificationChecks {
            temporal,
            citations,
            image,
            network,
        }
    }
}

fn unavailable_reasons(checks: &VerificationChecks) -> Vec<String> {
    let mut reasons = Vec::new();
    let mut collect = |name: &str, unavailable: Option<&String>| {
        if let Some(reason) = unavailable {
            reasons.push(format!("{name}: {reason}"));
        }
    };
    collect("temporal", unavailable_reason(&checks.temporal));
    collect("citations", unavailable_reason(&checks.citations));
    collect("image", unavailable_reason(&checks.image));
    collect("network", unavailable_reason(&checks.network));
    reasons
}

fn unavailable_reason<T>(outcome: &CheckOutcome<T>) -> Option<&String> {
    match outcome {
        CheckOutcome::Unavailable { reason } => Some(reason),
        _ => None,
    }
}
