//! Error taxonomy for the verification engine.
//!
//! Per-check errors (`StorageError`, `GraphError`) are recovered locally
//! into a degraded sub-result. Only a request deadline, invalid input,
//! or all four checks failing surface as a hard failure.

mod config_error;
mod graph_error;
mod request_error;
mod storage_error;

pub use config_error::ConfigurationError;
pub use graph_error::GraphError;
pub use request_error::RequestError;
pub use storage_error::StorageError;

/// Top-level error for the Veracity engine.
#[derive(Debug, thiserror::Error)]
pub enum VeracityError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("verification exceeded deadline of {timeout_secs}s — retry the request")]
    Timeout { timeout_secs: u64 },

    #[error("all verification checks unavailable: {reasons}")]
    AllChecksUnavailable { reasons: String },
}

/// Result alias used across the workspace.
pub type VeracityResult<T> = Result<T, VeracityError>;
