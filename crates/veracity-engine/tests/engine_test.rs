use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use veracity_core::config::EngineConfig;
use veracity_core::errors::{RequestError, StorageError, VeracityError, VeracityResult};
use veracity_core::models::{
    Claim, ImageMetadata, OfficialEntity, OfficialSourceRegistry, Polarity, QuotedClaim,
    SourceDocument, VerificationRequest,
};
use veracity_core::traits::{IClaimStore, IImageMetadataExtractor};
use veracity_core::{Flag, Verdict};
use veracity_engine::VerificationOrchestrator;
use veracity_graph::CitationGraph;
use veracity_store::{MemoryDocumentIndex, MemoryImageIndex, SqliteClaimStore};

// ─── fixtures ───

struct SlowStore;

#[async_trait]
impl IClaimStore for SlowStore {
    async fn record(&self, _claim: &Claim) -> VeracityResult<()> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok(())
    }

    async fn claims_since(&self, _source: &str, _window: Duration) -> VeracityResult<Vec<Claim>> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok(Vec::new())
    }
}

struct FailingStore;

#[async_trait]
impl IClaimStore for FailingStore {
    async fn record(&self, claim: &Claim) -> VeracityResult<()> {
        Err(StorageError::WriteFailed {
            claim_hash: claim.claim_hash.clone(),
            reason: "disk full".to_string(),
        }
        .into())
    }

    async fn claims_since(&self, _source: &str, _window: Duration) -> VeracityResult<Vec<Claim>> {
        Err(StorageError::Unreachable {
            reason: "disk full".to_string(),
        }
        .into())
    }
}

struct FailingExtractor;

#[async_trait]
impl IImageMetadataExtractor for FailingExtractor {
    async fn extract(&self, _image_url: &str) -> VeracityResult<ImageMetadata> {
        Err(StorageError::QueryFailed {
            message: "decoder crashed".to_string(),
        }
        .into())
    }
}

fn registry() -> Arc<OfficialSourceRegistry> {
    Arc::new(OfficialSourceRegistry::new(vec![OfficialEntity {
        name: "Reserve Bank of India".to_string(),
        domains: vec!["rbi.org.in".to_string()],
        aliases: vec!["RBI".to_string()],
    }]))
}

fn request(claims: Vec<QuotedClaim>) -> VerificationRequest {
    VerificationRequest {
        url: "https://daily-post.example/rates".to_string(),
        title: "Repo rate raised".to_string(),
        content: "The central bank raised the repo rate.".to_string(),
        source: "daily-post".to_string(),
        image_url: None,
        published_at: Some(Utc::now() - Duration::hours(2)),
        claims,
    }
}

struct Harness {
    store: Arc<SqliteClaimStore>,
    lookup: Arc<MemoryDocumentIndex>,
    images: Arc<MemoryImageIndex>,
    graph: Arc<CitationGraph>,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: Arc::new(SqliteClaimStore::open_in_memory().unwrap()),
            lookup: Arc::new(MemoryDocumentIndex::new()),
            images: Arc::new(MemoryImageIndex::new()),
            graph: Arc::new(CitationGraph::new()),
        }
    }

    fn orchestrator(&self) -> VerificationOrchestrator {
        VerificationOrchestrator::new(
            self.store.clone(),
            registry(),
            self.lookup.clone(),
            self.images.clone(),
            self.graph.clone(),
            EngineConfig::default(),
        )
    }
}

// ─── end-to-end paths ───

#[tokio::test]
async fn clean_article_with_confirmed_quote_is_verified() {
    let harness = Harness::new();
    harness.lookup.insert(
        "Reserve Bank of India",
        SourceDocument {
            url: "https://rbi.org.in/press/42".to_string(),
            text: "the repo rate was raised to six point five percent today".to_string(),
        },
    );

    let request = request(vec![QuotedClaim::attributed(
        "repo rate raised to six point five percent",
        "RBI",
    )]);
    let result = harness.orchestrator().verify(&request).await.unwrap();

    assert_eq!(result.verdict, Verdict::Verified);
    assert!(result.overall_score >= 0.75);
    assert!(result.flags.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.source, "daily-post");
}

#[tokio::test]
async fn unconfirmed_attributed_quote_is_flagged() {
    let harness = Harness::new();
    // Registry knows the entity, but no document confirms the quote.
    let request = request(vec![QuotedClaim::attributed(
        "repo rate lowered to three percent",
        "RBI",
    )]);
    let result = harness.orchestrator().verify(&request).await.unwrap();

    assert!(result.flags.contains(&Flag::UnverifiedQuote));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("RBI") && w.contains("could not be confirmed")));
    assert!(result.verdict != Verdict::Verified);
}

#[tokio::test]
async fn repeated_contradictions_trigger_a_narrative_shift() {
    let harness = Harness::new();
    let now = Utc::now();
    let seed = |article: &str, text: &str, polarity: Polarity, days_ago: i64| {
        Claim::new(
            "daily-post",
            article,
            text,
            "dam-ministry-project",
            polarity,
            now - Duration::days(days_ago),
        )
    };
    for claim in [
        seed("a1", "the ministry confirmed the dam project", Polarity::Affirms, 8),
        seed("a2", "the ministry denied the dam project", Polarity::Denies, 6),
        seed("a3", "the ministry reviewed the dam project", Polarity::Neutral, 4),
        seed("a4", "the ministry discussed the dam project", Polarity::Neutral, 2),
    ] {
        harness.store.record(&claim).await.unwrap();
    }

    // The request's own claim brings the window to 5, meeting the minimum
    // sample size; 2 of 5 contradictory exceeds the 0.15 threshold.
    let request = request(vec![QuotedClaim::new("the committee met on monday")]);
    let result = harness.orchestrator().verify(&request).await.unwrap();

    assert!(result.flags.contains(&Flag::NarrativeShift));
    assert_eq!(result.verdict, Verdict::NeedsReview);
}

#[tokio::test]
async fn citation_loop_is_reported_as_circular() {
    use veracity_core::traits::ICitationGraph;

    let harness = Harness::new();
    harness.graph.add_citation("daily-post", "metro-wire").unwrap();
    harness.graph.add_citation("metro-wire", "daily-post").unwrap();

    let result = harness.orchestrator().verify(&request(vec![])).await.unwrap();

    assert!(result.flags.contains(&Flag::CircularReporting));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("daily-post -> metro-wire -> daily-post")));
    assert!(result.verdict != Verdict::Verified);
}

#[tokio::test]
async fn future_dated_image_is_flagged_and_capped() {
    let harness = Harness::new();
    harness.images.insert(
        "https://cdn.example/photo.jpg",
        ImageMetadata {
            captured_at: Some(Utc::now() + Duration::days(3)),
            camera: Some("Canon EOS R5".to_string()),
            software: None,
        },
    );

    let mut request = request(vec![]);
    request.image_url = Some("https://cdn.example/photo.jpg".to_string());
    let result = harness.orchestrator().verify(&request).await.unwrap();

    assert!(result.flags.contains(&Flag::FutureDatedImage));
    let image = result.checks.image.as_complete().unwrap();
    assert!(image.future_dated);
    assert!(image.confidence <= 0.2);
}

// ─── failure paths ───

#[tokio::test]
async fn empty_required_field_is_rejected_before_any_check() {
    let harness = Harness::new();
    let mut request = request(vec![]);
    request.url = "   ".to_string();

    let err = harness.orchestrator().verify(&request).await.unwrap_err();
    assert!(matches!(
        err,
        VeracityError::Request(RequestError::EmptyField { field: "url" })
    ));
}

#[tokio::test(start_paused = true)]
async fn a_stalled_collaborator_fails_the_request_with_timeout() {
    let harness = Harness::new();
    let orchestrator = VerificationOrchestrator::new(
        Arc::new(SlowStore),
        registry(),
        harness.lookup.clone(),
        harness.images.clone(),
        harness.graph.clone(),
        EngineConfig::default().with_timeout_secs(1),
    );

    let request = request(vec![QuotedClaim::new("the committee met on monday")]);
    let err = orchestrator.verify(&request).await.unwrap_err();
    assert!(matches!(err, VeracityError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn degraded_collaborators_degrade_the_score_but_not_the_request() {
    let harness = Harness::new();
    let orchestrator = VerificationOrchestrator::new(
        Arc::new(FailingStore),
        registry(),
        harness.lookup.clone(),
        Arc::new(FailingExtractor),
        harness.graph.clone(),
        EngineConfig::default(),
    );

    let mut request = request(vec![QuotedClaim::new("the committee met on monday")]);
    request.image_url = Some("https://cdn.example/photo.jpg".to_string());
    let result = orchestrator.verify(&request).await.unwrap();

    assert!(result.checks.temporal.is_unavailable());
    assert!(result.checks.image.is_unavailable());
    // Fusion renormalizes over what ran: the not-applicable citation check
    // (neutral 1.0, weight 0.25) and the network check (seed trust 0.5,
    // weight 0.30).
    let expected = (0.25 * 1.0 + 0.30 * 0.5) / 0.55;
    assert!((result.overall_score - expected).abs() < 1e-9);
    assert_eq!(result.verdict, Verdict::NeedsReview);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Temporal check unavailable")));
    assert!(result.flags.is_empty());
}
