//! CitationGraph — implements ICitationGraph over a petgraph DiGraph with
//! an epoch-guarded trust cache.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use veracity_core::errors::{GraphError, VeracityResult};
use veracity_core::models::{CitationEdge, TrustScore};
use veracity_core::traits::ICitationGraph;

use crate::cycles;
use crate::trust;

/// Edge payload: first-seen timestamp plus occurrence count.
#[derive(Debug, Clone)]
pub(crate) struct EdgeInfo {
    pub first_seen: DateTime<Utc>,
    pub occurrences: u64,
}

/// The graph plus its name index and mutation epoch.
pub(crate) struct GraphState {
    pub graph: DiGraph<String, EdgeInfo>,
    pub nodes: HashMap<String, NodeIndex>,
    /// Bumped on every mutation; the trust cache is keyed by it.
    pub epoch: u64,
}

impl GraphState {
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), idx);
        idx
    }
}

/// Trust scores computed at a given epoch. Any mutation invalidates the
/// snapshot, so cached scores are never stale beyond one mutation epoch.
struct TrustSnapshot {
    epoch: u64,
    scores: HashMap<String, f64>,
}

/// Directed citation graph shared across verification requests.
///
/// The state lock serializes mutations against trust recomputation; trust
/// reads hold the read lock for the whole fixed-point computation, so they
/// always see a consistent snapshot.
pub struct CitationGraph {
    state: RwLock<GraphState>,
    trust_cache: RwLock<Option<TrustSnapshot>>,
}

impl CitationGraph {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(GraphState {
                graph: DiGraph::new(),
                nodes: HashMap::new(),
                epoch: 0,
            }),
            trust_cache: RwLock::new(None),
        }
    }

    fn read_state(&self) -> VeracityResult<RwLockReadGuard<'_, GraphState>> {
        self.state.read().map_err(|_| {
            GraphError::GraphInconsistency {
                details: "state lock poisoned".into(),
            }
            .into()
        })
    }

    fn write_state(&self) -> VeracityResult<RwLockWriteGuard<'_, GraphState>> {
        self.state.write().map_err(|_| {
            GraphError::GraphInconsistency {
                details: "state lock poisoned".into(),
            }
            .into()
        })
    }

    /// Recompute and cache trust scores if the cache epoch is stale.
    /// Returns the score for `source`, seeding unknown sources at 0.5.
    fn trust_for(&self, source: &str) -> VeracityResult<f64> {
        let state = self.read_state()?;
        {
            let cache = self.trust_cache.read().map_err(|_| {
                GraphError::GraphInconsistency {
                    details: "trust cache lock poisoned".into(),
                }
            })?;
            if let Some(snapshot) = cache.as_ref() {
                if snapshot.epoch == state.epoch {
                    return Ok(snapshot
                        .scores
                        .get(source)
                        .copied()
                        .unwrap_or(veracity_core::constants::TRUST_SEED));
                }
            }
        }

        let scores = trust::propagate(&state);
        debug!(epoch = state.epoch, nodes = scores.len(), "trust snapshot recomputed");
        let result = scores
            .get(source)
            .copied()
            .unwrap_or(veracity_core::constants::TRUST_SEED);

        let mut cache = self.trust_cache.write().map_err(|_| {
            GraphError::GraphInconsistency {
                details: "trust cache lock poisoned".into(),
            }
        })?;
        *cache = Some(TrustSnapshot {
            epoch: state.epoch,
            scores,
        });
        Ok(result)
    }

    pub fn node_count(&self) -> usize {
        self.state.read().map(|s| s.graph.node_count()).unwrap_or(0)
    }

    pub fn edge_count(&self) -> usize {
        self.state.read().map(|s| s.graph.edge_count()).unwrap_or(0)
    }
}

impl Default for CitationGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ICitationGraph for CitationGraph {
    fn add_citation(&self, citing: &str, cited: &str) -> VeracityResult<()> {
        if citing == cited {
            return Err(GraphError::SelfCitation {
                source_id: citing.to_string(),
            }
            .into());
        }

        let mut state = self.write_state()?;
        let from = state.intern(citing);
        let to = state.intern(cited);

        match state.graph.find_edge(from, to) {
            Some(edge) => {
                if let Some(info) = state.graph.edge_weight_mut(edge) {
                    info.occurrences += 1;
                }
            }
            None => {
                state.graph.add_edge(
                    from,
                    to,
                    EdgeInfo {
                        first_seen: Utc::now(),
                        occurrences: 1,
                    },
                );
            }
        }
        state.epoch += 1;
        debug!(citing, cited, epoch = state.epoch, "citation recorded");
        Ok(())
    }

    fn trust_score(&self, source: &str) -> VeracityResult<TrustScore> {
        Ok(TrustScore::new(self.trust_for(source)?))
    }

    fn find_cycle(&self, source: &str) -> VeracityResult<Option<Vec<String>>> {
        let state = self.read_state()?;
        Ok(cycles::find_cycle_from(&state, source))
    }

    fn edge(&self, citing: &str, cited: &str) -> Option<CitationEdge> {
        let state = self.state.read().ok()?;
        let from = *state.nodes.get(citing)?;
        let to = *state.nodes.get(cited)?;
        let edge = state.graph.find_edge(from, to)?;
        let info = state.graph.edge_weight(edge)?;
        Some(CitationEdge {
            citing: citing.to_string(),
            cited: cited.to_string(),
            first_seen: info.first_seen,
            occurrences: info.occurrences,
        })
    }
}
