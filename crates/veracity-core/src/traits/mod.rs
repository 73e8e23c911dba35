//! Collaborator interfaces. The engine depends only on these contracts,
//! never on concrete implementations — they are injected at construction.

mod citation_graph;
mod claim_store;
mod document_lookup;
mod image_metadata;

pub use citation_graph::ICitationGraph;
pub use claim_store::IClaimStore;
pub use document_lookup::IDocumentLookup;
pub use image_metadata::IImageMetadataExtractor;
