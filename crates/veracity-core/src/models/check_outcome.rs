use serde::{Deserialize, Serialize};

/// Tagged outcome of a single verification check.
///
/// `NotApplicable` is neutral (scores 1.0 in fusion); `Unavailable` is a
/// degraded result excluded from fusion entirely — the engine reports a
/// real unknown state instead of fabricating a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome<T> {
    Complete(T),
    NotApplicable,
    Unavailable { reason: String },
}

impl<T> CheckOutcome<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn as_complete(&self) -> Option<&T> {
        match self {
            Self::Complete(inner) => Some(inner),
            _ => None,
        }
    }
}
