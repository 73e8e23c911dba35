//! Trust propagation: simplified PageRank-like fixed point.
//!
//! Nodes with no incoming edges hold the neutral seed (0.5) — they are the
//! independent roots trust flows from. Cited nodes start at zero and take
//! the occurrence-weighted average trust of their citers each round, so
//! trust reaches a node only through chains that lead back to independent
//! roots. A cluster that only cites itself receives nothing and sinks
//! toward zero. Iteration stops at convergence or at the iteration cap,
//! whichever comes first.

use std::collections::HashMap;

use petgraph::visit::EdgeRef;
use petgraph::Direction;

use veracity_core::constants::{TRUST_CONVERGENCE_EPSILON, TRUST_MAX_ITERATIONS, TRUST_SEED};

use crate::graph::GraphState;

/// Compute trust for every node in the graph snapshot.
pub(crate) fn propagate(state: &GraphState) -> HashMap<String, f64> {
    let graph = &state.graph;
    let indices: Vec<_> = graph.node_indices().collect();

    let mut scores: HashMap<_, f64> = indices
        .iter()
        .map(|&i| {
            let is_root = graph
                .edges_directed(i, Direction::Incoming)
                .next()
                .is_none();
            (i, if is_root { TRUST_SEED } else { 0.0 })
        })
        .collect();

    for _ in 0..TRUST_MAX_ITERATIONS {
        let mut next = scores.clone();
        let mut max_delta: f64 = 0.0;

        for &node in &indices {
            let mut weighted_sum = 0.0;
            let mut weight_total = 0.0;
            for edge in graph.edges_directed(node, Direction::Incoming) {
                let citer = edge.source();
                let w = edge.weight().occurrences as f64;
                weighted_sum += scores[&citer] * w;
                weight_total += w;
            }
            // Roots hold the seed.
            if weight_total == 0.0 {
                continue;
            }
            let updated = weighted_sum / weight_total;
            max_delta = max_delta.max((updated - scores[&node]).abs());
            next.insert(node, updated);
        }

        scores = next;
        if max_delta < TRUST_CONVERGENCE_EPSILON {
            break;
        }
    }

    scores
        .into_iter()
        .map(|(idx, score)| (graph[idx].clone(), score.clamp(0.0, 1.0)))
        .collect()
}
