use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CLAIM_HASH_LEN;

/// Stance tag attached to a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Asserts the subject ("confirmed", "will", "approve"...).
    Affirms,
    /// Negates the subject ("denied", "will not", "reject"...).
    Denies,
    /// No detectable stance. Neutral claims never contradict.
    Neutral,
}

impl Polarity {
    /// Whether two polarities are opposite stances.
    pub fn opposes(self, other: Polarity) -> bool {
        matches!(
            (self, other),
            (Polarity::Affirms, Polarity::Denies) | (Polarity::Denies, Polarity::Affirms)
        )
    }
}

/// A claim asserted by a source in an article.
///
/// Immutable once stored; uniquely keyed by `(source, article, claim_hash)`.
/// Never updated — a source changing its stance produces a new claim that
/// supersedes (and may contradict) the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Source identifier (publication name).
    pub source: String,
    /// Article identifier (usually the article URL).
    pub article: String,
    /// Normalized claim text.
    pub text: String,
    /// Normalized subject key — claims about the same subject share it.
    pub subject_key: String,
    /// Stance tag.
    pub polarity: Polarity,
    /// When the source asserted the claim.
    pub asserted_at: DateTime<Utc>,
    /// Content hash, part of the claim's unique key.
    pub claim_hash: String,
}

impl Claim {
    /// Build a claim, deriving its content hash from the normalized text.
    pub fn new(
        source: impl Into<String>,
        article: impl Into<String>,
        text: impl Into<String>,
        subject_key: impl Into<String>,
        polarity: Polarity,
        asserted_at: DateTime<Utc>,
    ) -> Self {
        let text = text.into();
        let claim_hash = Self::compute_hash(&text);
        Self {
            source: source.into(),
            article: article.into(),
            text,
            subject_key: subject_key.into(),
            polarity,
            asserted_at,
            claim_hash,
        }
    }

    /// Truncated blake3 hash of the lowercased, trimmed claim text.
    pub fn compute_hash(text: &str) -> String {
        let digest = blake3::hash(text.to_lowercase().trim().as_bytes());
        digest.to_hex()[..CLAIM_HASH_LEN].to_string()
    }

    /// Whether this claim contradicts another: same subject, opposite stance.
    pub fn contradicts(&self, other: &Claim) -> bool {
        !self.subject_key.is_empty()
            && self.subject_key == other.subject_key
            && self.polarity.opposes(other.polarity)
    }
}
