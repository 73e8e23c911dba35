//! Text normalization shared by the temporal and citation checks:
//! tokenization, stop words, stance detection, subject keys, token overlap.
//!
//! Deliberately shallow — full natural-language claim extraction happens
//! upstream; these helpers only need to be stable and deterministic.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use veracity_core::models::Polarity;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9']+").expect("static regex"));

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "are", "was",
    "were", "be", "been", "has", "have", "had", "that", "this", "with", "from", "by", "it", "its",
];

/// Markers that negate a subject. Checked before the affirming set because
/// phrases like "will not" contain affirming tokens.
const DENY_MARKERS: &[&str] = &[
    "will not", "won't", "denied", "denies", "deny", "false", "decrease", "decreased", "reject",
    "rejected", "rejects", "oppose", "opposes", "opposed", "no longer", "never",
];

const AFFIRM_MARKERS: &[&str] = &[
    "will", "confirmed", "confirms", "confirm", "true", "increase", "increased", "increases",
    "approve", "approved", "approves", "support", "supports", "supported", "announced",
];

/// Lowercase, trim, and collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Content tokens: longer than 3 chars, not a stop word.
fn content_tokens(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() > 3 && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Detect the stance of a claim from its wording.
pub fn detect_polarity(text: &str) -> Polarity {
    let normalized = normalize(text);
    if DENY_MARKERS.iter().any(|m| contains_marker(&normalized, m)) {
        return Polarity::Denies;
    }
    if AFFIRM_MARKERS.iter().any(|m| contains_marker(&normalized, m)) {
        return Polarity::Affirms;
    }
    Polarity::Neutral
}

/// Marker match on word boundaries (multi-word markers match as phrases).
fn contains_marker(text: &str, marker: &str) -> bool {
    if marker.contains(' ') || marker.contains('\'') {
        return text.contains(marker);
    }
    tokenize(text).iter().any(|t| t == marker)
}

/// Normalized subject key: content tokens minus stance markers, sorted and
/// joined. Claims about the same subject share a key regardless of stance,
/// which is what lets opposite polarities register as a contradiction.
pub fn subject_key(text: &str) -> String {
    let tokens: BTreeSet<String> = content_tokens(text)
        .into_iter()
        .filter(|t| {
            !DENY_MARKERS.contains(&t.as_str()) && !AFFIRM_MARKERS.contains(&t.as_str())
        })
        .collect();
    tokens.into_iter().collect::<Vec<_>>().join("-")
}

/// Fraction of the quote's content tokens present in the document text.
/// Returns 0.0 for quotes with no content tokens.
pub fn token_overlap(quote: &str, document: &str) -> f64 {
    let quote_tokens = content_tokens(quote);
    if quote_tokens.is_empty() {
        return 0.0;
    }
    let doc_tokens = content_tokens(document);
    let matched = quote_tokens.iter().filter(|t| doc_tokens.contains(*t)).count();
    matched as f64 / quote_tokens.len() as f64
}
