//! Parse an oracle reply into a comparison verdict

use crate::error::ComparatorError;
use addrmatch_domain::ComparisonVerdict;
use serde_json::Value;
use tracing::warn;

/// Parse the oracle's raw reply into a validated verdict
///
/// The reply is expected to carry a JSON object, possibly wrapped in a
/// Markdown code fence. Extraction, parse, and validation are distinct
/// stages so that a syntactically broken reply and a well-formed reply
/// with the wrong shape are reported as different failures.
pub fn parse_verdict(reply: &str) -> Result<ComparisonVerdict, ComparatorError> {
    let payload = extract_payload(reply);

    let value: Value = serde_json::from_str(payload).map_err(|e| {
        warn!("Oracle reply is not valid JSON: {}", payload);
        ComparatorError::MalformedReply(format!("JSON parse error: {}", e))
    })?;

    validate_verdict(&value).map_err(|e| {
        warn!("Oracle verdict failed validation: {}", value);
        e
    })
}

/// Isolate the JSON payload from a possibly fence-wrapped reply
///
/// One rule, not per-case branching: if the reply contains a fenced block
/// (with or without a `json` language tag), its trimmed interior is the
/// candidate payload; otherwise the whole trimmed reply is.
fn extract_payload(reply: &str) -> &str {
    let fenced = reply.find("```").and_then(|start| {
        let interior = &reply[start + 3..];
        let interior = interior.strip_prefix("json").unwrap_or(interior);
        interior.find("```").map(|end| interior[..end].trim())
    });

    fenced.unwrap_or_else(|| reply.trim())
}

/// Check the parsed value field-by-field against the verdict contract
///
/// No coercion: a numeric string for `confidence` or a quoted boolean for
/// `match` is rejected, not converted. The three contract fields are
/// carried through unmodified; anything else in the object is discarded.
fn validate_verdict(value: &Value) -> Result<ComparisonVerdict, ComparatorError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ComparatorError::InvalidVerdict("Expected a JSON object".to_string()))?;

    let is_match = obj
        .get("match")
        .and_then(Value::as_bool)
        .ok_or_else(|| ComparatorError::InvalidVerdict("Missing or non-boolean 'match'".to_string()))?;

    let confidence = obj
        .get("confidence")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            ComparatorError::InvalidVerdict("Missing or non-numeric 'confidence'".to_string())
        })?;

    let reasoning = obj
        .get("reasoning")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ComparatorError::InvalidVerdict("Missing or non-string 'reasoning'".to_string())
        })?
        .to_string();

    Ok(ComparisonVerdict {
        is_match,
        confidence,
        reasoning,
    })
}
