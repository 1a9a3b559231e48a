//! Addrmatch Oracle Provider Layer
//!
//! Pluggable text-generation oracle implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TextOracle` trait from
//! `addrmatch-domain`. The production provider talks to Google's Generative
//! Language API; the mock provider is deterministic and network-free.
//!
//! # Providers
//!
//! - `MockOracle`: Deterministic mock for testing
//! - `GeminiOracle`: Google Gemini `generateContent` integration
//!
//! # Examples
//!
//! ```
//! use addrmatch_llm::MockOracle;
//! use addrmatch_domain::TextOracle;
//!
//! # tokio_test::block_on(async {
//! let oracle = MockOracle::new("Hello from the oracle!");
//! let reply = oracle.generate("test prompt").await.unwrap();
//! assert_eq!(reply, "Hello from the oracle!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod gemini;

use addrmatch_domain::{OracleError, TextOracle};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub use gemini::GeminiOracle;

/// Mock oracle for deterministic testing
///
/// Returns pre-configured replies without making any network calls.
/// Clones share the reply map and call count, so a test can keep a clone
/// for assertions after handing the oracle to the pipeline.
#[derive(Debug, Clone)]
pub struct MockOracle {
    default_reply: String,
    failure: Option<OracleError>,
    replies: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockOracle {
    /// Create a new MockOracle with a fixed reply for all prompts
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            failure: None,
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockOracle that fails every call with the given error
    pub fn failing(error: OracleError) -> Self {
        Self {
            default_reply: String::new(),
            failure: Some(error),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific reply for a given prompt
    pub fn add_reply(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), reply.into());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

#[async_trait]
impl TextOracle for MockOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let replies = self.replies.lock().unwrap();
        if let Some(reply) = replies.get(prompt) {
            return Ok(reply.clone());
        }

        Ok(self.default_reply.clone())
    }
}
