//! # veracity-graph
//!
//! Directed citation graph — sources as nodes, "cites" edges weighted by
//! occurrence count. Two algorithms:
//! 1. **Trust propagation** — occurrence-weighted fixed point over citer
//!    trust, seeded at 0.5, capped at 50 iterations (see
//!    `veracity_core::constants` for the load-bearing values).
//! 2. **Circular-reporting detection** — DFS with a recursion-stack set,
//!    O(V+E), reporting the first cycle found back to the requesting source.
//!
//! Mutations are serialized against trust recomputation: trust always reads
//! a consistent graph snapshot, never a graph mid-mutation.

mod cycles;
mod graph;
mod trust;

pub use graph::CitationGraph;
