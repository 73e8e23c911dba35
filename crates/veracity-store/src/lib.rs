//! # veracity-store
//!
//! Concrete collaborator implementations behind the core traits:
//! - `SqliteClaimStore` — per-source claim history on SQLite.
//! - `load_registry` — official-source registry from a TOML file,
//!   validated at startup.
//! - `HttpDocumentLookup` — quote lookup against an entity's trusted
//!   domains over HTTP.
//! - `MemoryDocumentIndex` / `MemoryImageIndex` — in-memory fixtures for
//!   tests and offline runs.
//!
//! The engine depends only on the traits; swapping any of these for a
//! remote service is a construction-time decision.

mod claim_store;
mod lookup;
mod registry;

pub use claim_store::SqliteClaimStore;
pub use lookup::{HttpDocumentLookup, MemoryDocumentIndex, MemoryImageIndex};
pub use registry::load_registry;
