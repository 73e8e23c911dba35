/// Veracity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seed trust assigned to sources with no incoming citations.
/// Load-bearing for reproducibility: changing the seed changes every
/// propagated trust score.
pub const TRUST_SEED: f64 = 0.5;

/// Maximum fixed-point iterations for trust propagation.
/// Propagation stops here even if the scores have not converged.
pub const TRUST_MAX_ITERATIONS: usize = 50;

/// Convergence threshold for trust propagation: iteration stops once the
/// largest per-node delta falls below this.
pub const TRUST_CONVERGENCE_EPSILON: f64 = 1e-4;

/// Truncated hex length of a claim content hash.
pub const CLAIM_HASH_LEN: usize = 16;

/// Maximum trusted domains queried per entity during quote lookup.
pub const MAX_LOOKUP_DOMAINS: usize = 2;
