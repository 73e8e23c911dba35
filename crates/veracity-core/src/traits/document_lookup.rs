use async_trait::async_trait;

use crate::errors::VeracityResult;
use crate::models::{OfficialEntity, SourceDocument};

/// Given an entity and search text, return matching documents from the
/// entity's trusted domains. Retrieval is external: file-backed, database,
/// or remote service are all acceptable.
#[async_trait]
pub trait IDocumentLookup: Send + Sync {
    async fn search(
        &self,
        entity: &OfficialEntity,
        text: &str,
    ) -> VeracityResult<Vec<SourceDocument>>;
}
