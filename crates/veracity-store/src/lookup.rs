//! Document lookup and image metadata collaborators.
//!
//! `HttpDocumentLookup` queries an entity's trusted domains over HTTP.
//! The in-memory variants back tests and offline runs with the same
//! trait surface.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use veracity_core::constants::MAX_LOOKUP_DOMAINS;
use veracity_core::errors::{StorageError, VeracityResult};
use veracity_core::models::{ImageMetadata, OfficialEntity, SourceDocument};
use veracity_core::traits::{IDocumentLookup, IImageMetadataExtractor};

/// Quote lookup against an entity's trusted domains.
///
/// Queries `https://{domain}/search?q={text}` on at most
/// [`MAX_LOOKUP_DOMAINS`] domains per entity. A domain that errors is
/// skipped; the lookup only fails when every domain does.
pub struct HttpDocumentLookup {
    client: reqwest::Client,
}

impl HttpDocumentLookup {
    pub fn new(request_timeout: Duration) -> VeracityResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| StorageError::Unreachable {
                reason: format!("http client setup failed: {e}"),
            })?;
        Ok(Self { client })
    }

    async fn query_domain(&self, domain: &str, text: &str) -> Result<SourceDocument, String> {
        let url = format!("https://{domain}/search");
        let response = self
            .client
            .get(&url)
            .query(&[("q", text)])
            .send()
            .await
            .map_err(|e| format!("{domain}: {e}"))?;
        let response = response
            .error_for_status()
            .map_err(|e| format!("{domain}: {e}"))?;
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|e| format!("{domain}: {e}"))?;
        Ok(SourceDocument {
            url: final_url,
            text: body,
        })
    }
}

#[async_trait]
impl IDocumentLookup for HttpDocumentLookup {
    async fn search(
        &self,
        entity: &OfficialEntity,
        text: &str,
    ) -> VeracityResult<Vec<SourceDocument>> {
        let mut documents = Vec::new();
        let mut failures = Vec::new();
        for domain in entity.domains.iter().take(MAX_LOOKUP_DOMAINS) {
            match self.query_domain(domain, text).await {
                Ok(doc) => documents.push(doc),
                Err(reason) => {
                    warn!(entity = %entity.name, %reason, "domain lookup failed");
                    failures.push(reason);
                }
            }
        }
        if documents.is_empty() && !failures.is_empty() {
            return Err(StorageError::LookupFailed {
                entity: entity.name.clone(),
                reason: failures.join("; "),
            }
            .into());
        }
        debug!(entity = %entity.name, documents = documents.len(), "lookup complete");
        Ok(documents)
    }
}

/// In-memory document index keyed by canonical entity name.
#[derive(Default)]
pub struct MemoryDocumentIndex {
    documents: RwLock<HashMap<String, Vec<SourceDocument>>>,
}

impl MemoryDocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entity_name: &str, document: SourceDocument) {
        if let Ok(mut documents) = self.documents.write() {
            documents
                .entry(entity_name.to_lowercase())
                .or_default()
                .push(document);
        }
    }
}

#[async_trait]
impl IDocumentLookup for MemoryDocumentIndex {
    async fn search(
        &self,
        entity: &OfficialEntity,
        _text: &str,
    ) -> VeracityResult<Vec<SourceDocument>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StorageError::LookupFailed {
                entity: entity.name.clone(),
                reason: "document index lock poisoned".to_string(),
            })?;
        Ok(documents
            .get(&entity.name.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory image metadata keyed by image URL. Unknown URLs yield empty
/// metadata, which the image check treats as a missing-metadata penalty.
#[derive(Default)]
pub struct MemoryImageIndex {
    images: RwLock<HashMap<String, ImageMetadata>>,
}

impl MemoryImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, image_url: &str, metadata: ImageMetadata) {
        if let Ok(mut images) = self.images.write() {
            images.insert(image_url.to_string(), metadata);
        }
    }
}

#[async_trait]
impl IImageMetadataExtractor for MemoryImageIndex {
    async fn extract(&self, image_url: &str) -> VeracityResult<ImageMetadata> {
        let images = self.images.read().map_err(|_| StorageError::QueryFailed {
            message: "image index lock poisoned".to_string(),
        })?;
        Ok(images.get(image_url).cloned().unwrap_or_default())
    }
}
