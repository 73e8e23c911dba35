use crate::errors::VeracityResult;
use crate::models::{CitationEdge, TrustScore};

/// Directed "source cites source" graph with trust propagation and
/// cycle detection. In-process and synchronous: mutations are serialized
/// against trust recomputation by the implementation.
pub trait ICitationGraph: Send + Sync {
    /// Record (or increment) a citation. Self-loops are rejected.
    fn add_citation(&self, citing: &str, cited: &str) -> VeracityResult<()>;

    /// Propagated trust for a source. Unknown sources get the neutral seed.
    fn trust_score(&self, source: &str) -> VeracityResult<TrustScore>;

    /// First cycle of length ≥ 2 from `source` back to itself, as an
    /// ordered chain starting and ending at `source`.
    fn find_cycle(&self, source: &str) -> VeracityResult<Option<Vec<String>>>;

    /// The edge between two sources, if present.
    fn edge(&self, citing: &str, cited: &str) -> Option<CitationEdge>;
}
