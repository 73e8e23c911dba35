/// Invalid verification request.
///
/// Rejected immediately; no checks run.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("required field is empty: {field}")]
    EmptyField { field: &'static str },
}
