use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed "citing source → cited source" relationship.
///
/// `occurrences` is monotonically non-decreasing; self-loops are rejected
/// at insertion time by the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationEdge {
    pub citing: String,
    pub cited: String,
    /// First time this citation was observed.
    pub first_seen: DateTime<Utc>,
    /// How many articles carried the citation.
    pub occurrences: u64,
}
