//! Configuration for the Comparator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Comparator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Maximum time for a single oracle call (seconds)
    pub oracle_timeout_secs: u64,

    /// Maximum length of a single address (characters)
    pub max_address_length: usize,
}

impl ComparatorConfig {
    /// Get the oracle call timeout as a Duration
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.oracle_timeout_secs == 0 {
            return Err("oracle_timeout_secs must be greater than 0".to_string());
        }
        if self.max_address_length == 0 {
            return Err("max_address_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            oracle_timeout_secs: 30,
            max_address_length: 4_096,
        }
    }
}
