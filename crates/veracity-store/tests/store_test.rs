use chrono::{Duration, TimeZone, Utc};

use veracity_core::errors::{ConfigurationError, VeracityError};
use veracity_core::models::{Claim, ImageMetadata, OfficialEntity, Polarity, SourceDocument};
use veracity_core::traits::{IClaimStore, IDocumentLookup, IImageMetadataExtractor};
use veracity_store::{load_registry, MemoryDocumentIndex, MemoryImageIndex, SqliteClaimStore};

fn claim_at(source: &str, article: &str, text: &str, days_ago: i64) -> Claim {
    Claim::new(
        source,
        article,
        text,
        "dam-ministry-project",
        Polarity::Affirms,
        Utc::now() - Duration::days(days_ago),
    )
}

// ─── claim store ───

#[tokio::test]
async fn claims_come_back_in_ascending_time_order() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    store
        .record(&claim_at("daily-post", "a1", "dam approved", 9))
        .await
        .unwrap();
    store
        .record(&claim_at("daily-post", "a2", "dam funded", 2))
        .await
        .unwrap();
    store
        .record(&claim_at("daily-post", "a3", "dam construction started", 5))
        .await
        .unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    let articles: Vec<&str> = claims.iter().map(|c| c.article.as_str()).collect();
    assert_eq!(articles, vec!["a1", "a3", "a2"]);
}

#[tokio::test]
async fn rerecording_an_identical_claim_is_a_noop() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    let claim = claim_at("daily-post", "a1", "dam approved", 1);
    store.record(&claim).await.unwrap();
    store.record(&claim).await.unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
}

#[tokio::test]
async fn same_text_in_a_different_article_is_a_distinct_claim() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    store
        .record(&claim_at("daily-post", "a1", "dam approved", 1))
        .await
        .unwrap();
    store
        .record(&claim_at("daily-post", "a2", "dam approved", 1))
        .await
        .unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    assert_eq!(claims.len(), 2);
}

#[tokio::test]
async fn claims_outside_the_window_are_excluded() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    store
        .record(&claim_at("daily-post", "old", "dam approved", 45))
        .await
        .unwrap();
    store
        .record(&claim_at("daily-post", "recent", "dam funded", 3))
        .await
        .unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].article, "recent");
}

#[tokio::test]
async fn claims_from_other_sources_are_not_returned() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    store
        .record(&claim_at("daily-post", "a1", "dam approved", 1))
        .await
        .unwrap();
    store
        .record(&claim_at("metro-wire", "b1", "dam funded", 1))
        .await
        .unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].source, "daily-post");
}

#[tokio::test]
async fn claim_fields_round_trip_through_the_store() {
    let store = SqliteClaimStore::open_in_memory().unwrap();
    let asserted_at = Utc.with_ymd_and_hms(2026, 7, 14, 9, 30, 0).unwrap();
    let original = Claim::new(
        "daily-post",
        "https://daily-post.example/dam",
        "the ministry denied the dam project",
        "dam-ministry-project",
        Polarity::Denies,
        asserted_at,
    );
    store.record(&original).await.unwrap();

    let claims = store
        .claims_since("daily-post", Duration::days(365))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
    let stored = &claims[0];
    assert_eq!(stored.text, original.text);
    assert_eq!(stored.subject_key, original.subject_key);
    assert_eq!(stored.polarity, Polarity::Denies);
    assert_eq!(stored.asserted_at, asserted_at);
    assert_eq!(stored.claim_hash, original.claim_hash);
}

#[tokio::test]
async fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claims.db");

    {
        let store = SqliteClaimStore::open(&path).unwrap();
        store
            .record(&claim_at("daily-post", "a1", "dam approved", 1))
            .await
            .unwrap();
    }

    let reopened = SqliteClaimStore::open(&path).unwrap();
    let claims = reopened
        .claims_since("daily-post", Duration::days(30))
        .await
        .unwrap();
    assert_eq!(claims.len(), 1);
}

// ─── registry loader ───

fn write_registry(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn valid_registry_loads_and_resolves_aliases() {
    let (_dir, path) = write_registry(
        r#"
[[entity]]
name = "Reserve Bank of India"
domains = ["rbi.org.in"]
aliases = ["RBI"]

[[entity]]
name = "Ministry of Health"
domains = ["mohfw.gov.in", "pib.gov.in"]
"#,
    );

    let registry = load_registry(&path).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.lookup("rbi").map(|e| e.name.as_str()),
        Some("Reserve Bank of India")
    );
    assert!(registry.lookup("ministry of health").is_some());
    assert!(registry.lookup("unknown agency").is_none());
}

#[test]
fn missing_registry_file_is_a_startup_error() {
    let err = load_registry("/nonexistent/registry.toml").unwrap_err();
    assert!(matches!(
        err,
        VeracityError::Configuration(ConfigurationError::RegistryMissing { .. })
    ));
}

#[test]
fn malformed_toml_is_rejected() {
    let (_dir, path) = write_registry("[[entity]\nname = broken");
    let err = load_registry(&path).unwrap_err();
    assert!(matches!(
        err,
        VeracityError::Configuration(ConfigurationError::RegistryInvalid { .. })
    ));
}

#[test]
fn duplicate_canonical_names_are_rejected_case_insensitively() {
    let (_dir, path) = write_registry(
        r#"
[[entity]]
name = "Reserve Bank of India"
domains = ["rbi.org.in"]

[[entity]]
name = "reserve bank of india"
domains = ["rbi.org.in"]
"#,
    );
    let err = load_registry(&path).unwrap_err();
    assert!(matches!(
        err,
        VeracityError::Configuration(ConfigurationError::DuplicateEntity { .. })
    ));
}

#[test]
fn entity_without_domains_is_rejected() {
    let (_dir, path) = write_registry(
        r#"
[[entity]]
name = "Ministry of Health"
domains = []
"#,
    );
    let err = load_registry(&path).unwrap_err();
    assert!(matches!(
        err,
        VeracityError::Configuration(ConfigurationError::EmptyDomains { .. })
    ));
}

// ─── in-memory fixtures ───

fn rbi() -> OfficialEntity {
    OfficialEntity {
        name: "Reserve Bank of India".to_string(),
        domains: vec!["rbi.org.in".to_string()],
        aliases: vec!["RBI".to_string()],
    }
}

#[tokio::test]
async fn memory_index_returns_documents_for_known_entities() {
    let index = MemoryDocumentIndex::new();
    index.insert(
        "Reserve Bank of India",
        SourceDocument {
            url: "https://rbi.org.in/press/1".to_string(),
            text: "repo rate raised to six percent".to_string(),
        },
    );

    let documents = index.search(&rbi(), "repo rate").await.unwrap();
    assert_eq!(documents.len(), 1);

    let unknown = OfficialEntity {
        name: "Ministry of Health".to_string(),
        domains: vec!["mohfw.gov.in".to_string()],
        aliases: vec![],
    };
    assert!(index.search(&unknown, "repo rate").await.unwrap().is_empty());
}

#[tokio::test]
async fn image_index_round_trips_metadata_and_defaults_unknown_urls() {
    let index = MemoryImageIndex::new();
    let captured = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
    index.insert(
        "https://cdn.example/photo.jpg",
        ImageMetadata {
            captured_at: Some(captured),
            camera: Some("Nikon D850".to_string()),
            software: None,
        },
    );

    let known = index.extract("https://cdn.example/photo.jpg").await.unwrap();
    assert_eq!(known.captured_at, Some(captured));
    assert_eq!(known.camera.as_deref(), Some("Nikon D850"));

    let unknown = index.extract("https://cdn.example/other.jpg").await.unwrap();
    assert!(unknown.captured_at.is_none());
    assert!(unknown.camera.is_none());
}
