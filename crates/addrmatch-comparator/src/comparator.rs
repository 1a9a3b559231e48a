//! Core Comparator implementation

use crate::config::ComparatorConfig;
use crate::error::ComparatorError;
use crate::parser::parse_verdict;
use crate::prompt::PromptBuilder;
use addrmatch_domain::{ComparisonRequest, ComparisonVerdict, TextOracle};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Comparator produces an equivalence verdict for a pair of addresses
///
/// Stateless across calls: each `compare` builds its prompt, makes exactly
/// one oracle call bounded by the configured timeout, and validates the
/// reply. Failures are terminal; nothing is retried.
pub struct Comparator<O>
where
    O: TextOracle,
{
    oracle: Arc<O>,
    config: ComparatorConfig,
}

impl<O> Comparator<O>
where
    O: TextOracle + 'static,
{
    /// Create a new Comparator
    pub fn new(oracle: O, config: ComparatorConfig) -> Self {
        Self {
            oracle: Arc::new(oracle),
            config,
        }
    }

    /// Access the underlying oracle
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Produce a verdict for a comparison request
    ///
    /// Input is validated before any oracle call is issued; an invalid
    /// request produces zero outbound calls.
    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonVerdict, ComparatorError> {
        request.validate().map_err(ComparatorError::InvalidInput)?;

        if request.address1.len() > self.config.max_address_length
            || request.address2.len() > self.config.max_address_length
        {
            return Err(ComparatorError::InvalidInput(format!(
                "address exceeds {} characters",
                self.config.max_address_length
            )));
        }

        let prompt = PromptBuilder::new(&request.address1, &request.address2).build();
        debug!("Prompt length: {} chars", prompt.len());

        let reply = timeout(self.config.oracle_timeout(), self.oracle.generate(&prompt))
            .await
            .map_err(|_| ComparatorError::Timeout(self.config.oracle_timeout_secs))??;

        debug!("Oracle reply length: {} chars", reply.len());

        let verdict = parse_verdict(&reply)?;

        info!(
            "Comparison complete: match={}, confidence={}",
            verdict.is_match, verdict.confidence
        );

        Ok(verdict)
    }
}
