/// Citation graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("self-citation rejected for source {source_id}")]
    SelfCitation { source_id: String },

    #[error("graph inconsistency: {details}")]
    GraphInconsistency { details: String },
}
