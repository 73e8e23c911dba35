//! Official-source citation check: confirms attributed quotes against the
//! trusted domains of the named entity.

use std::sync::Arc;

use tracing::{debug, warn};

use veracity_core::config::CitationConfig;
use veracity_core::models::{
    CheckOutcome, CitationCheck, OfficialSourceRegistry, QuoteVerification, UnverifiedReason,
    VerificationRequest,
};
use veracity_core::traits::IDocumentLookup;

use crate::text;

/// Verifies quotes attributed to named officials.
pub struct CitationVerifier {
    registry: Arc<OfficialSourceRegistry>,
    lookup: Arc<dyn IDocumentLookup>,
    config: CitationConfig,
}

impl CitationVerifier {
    pub fn new(
        registry: Arc<OfficialSourceRegistry>,
        lookup: Arc<dyn IDocumentLookup>,
        config: CitationConfig,
    ) -> Self {
        Self {
            registry,
            lookup,
            config,
        }
    }

    /// Run the check. Never fatal: an unverifiable quote degrades the score
    /// but the request continues. Unattributed quotes are skipped here
    /// (the temporal check still counts them).
    pub async fn verify(&self, request: &VerificationRequest) -> CheckOutcome<CitationCheck> {
        let attributed: Vec<_> = request
            .claims
            .iter()
            .filter_map(|q| q.attributed_to.as_deref().map(|name| (name, q)))
            .collect();

        if attributed.is_empty() {
            return CheckOutcome::NotApplicable;
        }

        let mut quotes = Vec::with_capacity(attributed.len());
        for (name, quoted) in attributed {
            quotes.push(self.verify_quote(name, &quoted.text).await);
        }

        debug!(
            total = quotes.len(),
            verified = quotes.iter().filter(|q| q.verified).count(),
            "citation check complete"
        );
        CheckOutcome::Complete(CitationCheck { quotes })
    }

    /// Verify one quote. The attributed name is resolved exact-first, then
    /// by alias; when several entities match, the quote is verified only if
    /// every one of them confirms it (conservative tie-break).
    async fn verify_quote(&self, name: &str, quote: &str) -> QuoteVerification {
        let entities = self.registry.lookup_all(name);
        if entities.is_empty() {
            return QuoteVerification {
                quote: quote.to_string(),
                attributed_to: name.to_string(),
                verified: false,
                reason: Some(UnverifiedReason::UnknownEntity),
            };
        }

        let mut lookup_failed = false;
        let mut all_confirm = true;
        for entity in entities {
            match self.lookup.search(entity, quote).await {
                Ok(documents) => {
                    let confirmed = documents.iter().any(|doc| {
                        text::token_overlap(quote, &doc.text) >= self.config.similarity_threshold
                    });
                    if !confirmed {
                        all_confirm = false;
                    }
                }
                Err(e) => {
                    warn!(entity = %entity.name, error = %e, "document lookup failed");
                    lookup_failed = true;
                    all_confirm = false;
                }
            }
        }

        let reason = if all_confirm {
            None
        } else if lookup_failed {
            Some(UnverifiedReason::LookupFailed)
        } else {
            Some(UnverifiedReason::NotFoundInOfficialSource)
        };

        QuoteVerification {
            quote: quote.to_string(),
            attributed_to: name.to_string(),
            verified: all_confirm,
            reason,
        }
    }
}
