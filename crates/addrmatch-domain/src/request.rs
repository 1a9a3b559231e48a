//! Comparison request module

use serde::{Deserialize, Serialize};

/// A request to compare two free-text postal addresses
///
/// Lives for exactly one request/response cycle and is never persisted.
/// Fields default to empty strings on deserialization so that an absent
/// field and an empty field are rejected the same way by [`validate`].
///
/// [`validate`]: ComparisonRequest::validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// First address, verbatim user text
    #[serde(default)]
    pub address1: String,

    /// Second address, verbatim user text
    #[serde(default)]
    pub address2: String,
}

impl ComparisonRequest {
    /// Create a new comparison request
    pub fn new(address1: impl Into<String>, address2: impl Into<String>) -> Self {
        Self {
            address1: address1.into(),
            address2: address2.into(),
        }
    }

    /// Validate that both addresses are present
    ///
    /// Whitespace-only input counts as missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.address1.trim().is_empty() {
            return Err("address1 is missing or empty".to_string());
        }
        if self.address2.trim().is_empty() {
            return Err("address2 is missing or empty".to_string());
        }
        Ok(())
    }
}
