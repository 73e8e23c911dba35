/// Startup configuration errors.
///
/// Fatal at process initialization, never raised mid-request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("official-source registry not found at {path}")]
    RegistryMissing { path: String },

    #[error("official-source registry invalid: {reason}")]
    RegistryInvalid { reason: String },

    #[error("duplicate official entity: {name}")]
    DuplicateEntity { name: String },

    #[error("entity {name} has no trusted domains")]
    EmptyDomains { name: String },
}
