/// Collaborator storage/lookup errors.
///
/// Always recoverable at the request level: the affected check degrades
/// to an unavailable sub-result and the request continues.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("backing store unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("write failed for claim {claim_hash}: {reason}")]
    WriteFailed { claim_hash: String, reason: String },

    #[error("document lookup failed for {entity}: {reason}")]
    LookupFailed { entity: String, reason: String },
}
