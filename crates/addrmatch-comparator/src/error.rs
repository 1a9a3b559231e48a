//! Error types for the comparison pipeline

use addrmatch_domain::OracleError;
use thiserror::Error;

/// Errors that can occur while producing a verdict
#[derive(Error, Debug)]
pub enum ComparatorError {
    /// One or both addresses missing, empty, or oversized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Oracle unreachable or returned a non-success status
    #[error("Oracle call failed: {0}")]
    OracleCall(String),

    /// Oracle call exceeded the configured deadline
    #[error("Oracle call timed out after {0} seconds")]
    Timeout(u64),

    /// Oracle reply did not contain a parseable JSON payload
    #[error("Malformed oracle reply: {0}")]
    MalformedReply(String),

    /// Oracle reply parsed but failed structural validation
    #[error("Invalid verdict: {0}")]
    InvalidVerdict(String),
}

impl From<OracleError> for ComparatorError {
    fn from(e: OracleError) -> Self {
        match e {
            // A success envelope with nothing usable inside is a malformed
            // reply, not a transport failure
            OracleError::InvalidResponse(msg) => ComparatorError::MalformedReply(msg),
            other => ComparatorError::OracleCall(other.to_string()),
        }
    }
}
