use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

/// A quoted claim extracted from an article (extraction happens upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotedClaim {
    pub text: String,
    /// Named official the quote is attributed to. Unattributed quotes are
    /// counted by the temporal check but skipped by the citation check.
    #[serde(default)]
    pub attributed_to: Option<String>,
}

impl QuotedClaim {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributed_to: None,
        }
    }

    pub fn attributed(text: impl Into<String>, official: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributed_to: Some(official.into()),
        }
    }
}

/// One article submitted for verification. Transient: never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub url: String,
    pub title: String,
    pub content: String,
    /// Source (publication) name.
    pub source: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Article publication date; when absent, image timestamp checks
    /// compare against the verification time.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub claims: Vec<QuotedClaim>,
}

impl VerificationRequest {
    /// Reject requests with missing or empty required fields.
    /// Runs before any check; failures never reach the verifiers.
    pub fn validate(&self) -> Result<(), RequestError> {
        for (field, value) in [
            ("url", &self.url),
            ("title", &self.title),
            ("content", &self.content),
            ("source", &self.source),
        ] {
            if value.trim().is_empty() {
                return Err(RequestError::EmptyField { field });
            }
        }
        Ok(())
    }
}
