//! JSON recovery from model output

use crate::utils::error::{AdvisorError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Opening fence, optionally tagged `json`
static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?i:json)?").expect("Invalid fence regex"));

const FENCE: &str = "```";

/// Every possible body of the first fenced block, shortest first.
///
/// A fence can appear inside a JSON string, so each later closing fence is a
/// candidate too.
fn fenced_candidates(text: &str) -> impl Iterator<Item = &str> {
    let body = OPENING_FENCE
        .find(text)
        .map(|opening| &text[opening.end()..])
        .unwrap_or_default();

    body.match_indices(FENCE)
        .map(move |(closing, _)| body[..closing].trim())
}

/// Inner text of the first fenced block, if the text contains one
pub fn fenced_block(text: &str) -> Option<&str> {
    fenced_candidates(text).next()
}

/// Parse the JSON carried by a model reply.
///
/// A fenced block wins when present: the first closing fence that leaves valid
/// JSON ends it. Otherwise the whole trimmed text must be JSON. No partial
/// recovery is attempted.
pub fn extract_json(text: &str) -> Result<Value> {
    let mut first_error = None;

    for candidate in fenced_candidates(text) {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(AdvisorError::invalid_response(e.to_string()));
    }

    serde_json::from_str(text.trim()).map_err(|e| AdvisorError::invalid_response(e.to_string()))
}
