//! Trait definitions for external interactions
//!
//! These traits define the boundary between the comparison pipeline and
//! infrastructure. Implementations live in other crates (addrmatch-llm).

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during oracle operations
#[derive(Error, Debug, Clone)]
pub enum OracleError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Success status but an unusable response envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Trait for text-generation oracle operations
///
/// Implemented by the infrastructure layer (addrmatch-llm)
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Generate a text completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;
}
