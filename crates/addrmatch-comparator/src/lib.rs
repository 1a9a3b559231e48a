//! Addrmatch Comparison Orchestrator
//!
//! Turns a pair of free-text postal addresses into a validated equivalence
//! verdict by delegating the reasoning to a text-generation oracle.
//!
//! # Overview
//!
//! The oracle is an unreliable, weakly-typed producer: it emits "probably
//! JSON, probably well-formed" text. The Comparator is the contract
//! boundary that converts that into "definitely well-typed or definitely
//! rejected". There is no partial or best-effort success path.
//!
//! # Architecture
//!
//! ```text
//! ComparisonRequest → prompt → TextOracle → extract → parse → validate → ComparisonVerdict
//! ```
//!
//! # Example Usage
//!
//! ```
//! use addrmatch_comparator::{Comparator, ComparatorConfig};
//! use addrmatch_domain::ComparisonRequest;
//! use addrmatch_llm::MockOracle;
//!
//! # tokio_test::block_on(async {
//! let oracle = MockOracle::new(
//!     r#"{"match": true, "confidence": 0.92, "reasoning": "Same street and city."}"#,
//! );
//! let comparator = Comparator::new(oracle, ComparatorConfig::default());
//!
//! let request = ComparisonRequest::new("123 Main St, Springfield", "123 Main Street, Springfield");
//! let verdict = comparator.compare(&request).await.unwrap();
//!
//! assert!(verdict.is_match);
//! assert_eq!(verdict.confidence, 0.92);
//! # });
//! ```

#![warn(missing_docs)]

mod comparator;
mod config;
mod error;
mod parser;
mod prompt;


pub use comparator::Comparator;
pub use config::ComparatorConfig;
pub use error::ComparatorError;
