//! Normalization of a structured model result into the fixed rubric.
//!
//! Categories absent from the payload are omitted, never defaulted —
//! downstream averaging treats omission as "no data", not "score zero".

use serde_json::Value;
use tracing::warn;

use atelier_core::models::evaluation::{CategoryScore, NormalizedEvaluation};
use atelier_core::models::iteration::EvaluationMode;
use atelier_rubric::{Category, SCORE_RANGE};

/// Reduce a structured result to the per-category `{score, feedback}` view.
///
/// Returns `None` when no category could be extracted at all.
pub fn extract_standard(structured: &Value, mode: EvaluationMode) -> Option<NormalizedEvaluation> {
    let object = structured.as_object()?;

    let mut entries = Vec::new();
    for category in Category::ALL {
        let Some(data) = object.get(category.name()) else {
            continue;
        };
        let Some(score) = score_from(data, mode) else {
            continue;
        };
        let feedback = data
            .get("feedback")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        entries.push(CategoryScore {
            category,
            score,
            feedback,
        });
    }

    if entries.is_empty() {
        None
    } else {
        Some(NormalizedEvaluation::new(entries))
    }
}

/// Pull the authoritative score out of one category's payload.
///
/// `current_score` and `score` are aliases for "the score for this
/// submission" — comparison payloads use the former, standalone payloads
/// the latter. The mode only decides which key wins when both appear.
fn score_from(data: &Value, mode: EvaluationMode) -> Option<u8> {
    let keys: [&str; 2] = match mode {
        EvaluationMode::Comparison => ["current_score", "score"],
        EvaluationMode::Standalone => ["score", "current_score"],
    };
    let value = keys.iter().find_map(|key| data.get(*key))?;

    let number = value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?;

    if !SCORE_RANGE.contains(number as f64) {
        warn!(score = number, "dropping category with out-of-range score");
        return None;
    }

    Some(number as u8)
}
