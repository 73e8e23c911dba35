use async_trait::async_trait;
use chrono::Duration;

use crate::errors::VeracityResult;
use crate::models::Claim;

/// Per-source claim history with timestamps.
///
/// Implementations must guarantee that a write started before a read began
/// is either fully visible or fully absent to that read (no partial writes).
/// Failures surface as `StorageError`; the temporal check degrades to an
/// unavailable sub-result rather than aborting the request.
#[async_trait]
pub trait IClaimStore: Send + Sync {
    /// Persist a claim. Re-recording an identical claim is a no-op
    /// (claims are immutable, keyed by (source, article, claim_hash)).
    async fn record(&self, claim: &Claim) -> VeracityResult<()>;

    /// All claims asserted by `source` within the trailing `window`,
    /// ordered by `asserted_at` ascending.
    async fn claims_since(&self, source: &str, window: Duration) -> VeracityResult<Vec<Claim>>;
}
