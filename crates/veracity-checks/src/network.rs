//! Citation-network check: propagated trust plus circular-reporting
//! detection. A cycle is a strong negative signal — sources citing each
//! other is not independent corroboration.

use std::sync::Arc;

use tracing::{debug, warn};

use veracity_core::models::{CheckOutcome, CircularReporting, NetworkCheck};
use veracity_core::traits::ICitationGraph;

/// Reads trust and cycles from the shared citation graph.
pub struct NetworkVerifier {
    graph: Arc<dyn ICitationGraph>,
}

impl NetworkVerifier {
    pub fn new(graph: Arc<dyn ICitationGraph>) -> Self {
        Self { graph }
    }

    /// Run the check for the requesting source. Unknown sources get the
    /// neutral seed trust and no cycle.
    pub fn verify(&self, source: &str) -> CheckOutcome<NetworkCheck> {
        let trust_score = match self.graph.trust_score(source) {
            Ok(t) => t,
            Err(e) => {
                warn!(source, error = %e, "trust computation failed");
                return CheckOutcome::unavailable(format!("trust computation failed: {e}"));
            }
        };

        let circular_reporting = match self.graph.find_cycle(source) {
            Ok(Some(chain)) => CircularReporting {
                circular: true,
                chain,
            },
            Ok(None) => CircularReporting::none(),
            Err(e) => {
                warn!(source, error = %e, "cycle detection failed");
                return CheckOutcome::unavailable(format!("cycle detection failed: {e}"));
            }
        };

        debug!(
            source,
            trust = %trust_score,
            circular = circular_reporting.circular,
            "network check complete"
        );
        CheckOutcome::Complete(NetworkCheck {
            trust_score,
            circular_reporting,
        })
    }
}
