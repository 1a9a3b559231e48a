//! Comparison verdict module

use serde::{Deserialize, Serialize};

/// The structured verdict for one address comparison
///
/// Only constructed after the oracle's reply has passed structural
/// validation. Values are carried through from the oracle unmodified:
/// no clamping, no rounding. `confidence` is nominally in [0, 1] but is
/// enforced by type only, not by range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    /// Whether the two addresses denote the same real-world location
    #[serde(rename = "match")]
    pub is_match: bool,

    /// Oracle-reported confidence score
    pub confidence: f64,

    /// Brief natural-language justification of the decision
    pub reasoning: String,
}
