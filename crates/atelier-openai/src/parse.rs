//! Best-effort extraction of the JSON object embedded in model output.
//!
//! The model is instructed to answer with pure JSON but sometimes wraps it
//! in commentary anyway. The policy is deliberately tolerant: slice from
//! the first `{` to the last `}` and attempt a structural parse. Any
//! failure yields `None` — callers treat that as "no evaluation available"
//! and keep the pipeline alive.

use tracing::warn;

/// Locate and parse the JSON object in raw model output.
pub fn parse_structured(raw: &str) -> Option<serde_json::Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "model output contained braces but no parseable JSON");
            None
        }
    }
}
