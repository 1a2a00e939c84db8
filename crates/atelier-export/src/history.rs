//! History export: one entry per iteration, without image bytes.

use serde::Serialize;
use serde_json::Value;

use atelier_core::models::evaluation::NormalizedEvaluation;
use atelier_core::models::iteration::IterationRecord;

use crate::error::ExportError;

#[derive(Serialize)]
struct HistoryEntry<'a> {
    iteration: u32,
    image_name: &'a str,
    timestamp: &'a jiff::Timestamp,
    evaluation: Option<&'a NormalizedEvaluation>,
    parsed_response: Option<&'a Value>,
    raw_response: Option<&'a str>,
}

/// Render the session history as a pretty-printed JSON array.
pub fn export_history(records: &[IterationRecord]) -> Result<String, ExportError> {
    let entries: Vec<HistoryEntry<'_>> = records
        .iter()
        .map(|record| HistoryEntry {
            iteration: record.sequence_index,
            image_name: &record.image_name,
            timestamp: &record.created_at,
            evaluation: record.evaluation.as_ref(),
            parsed_response: record.structured_model_output.as_ref(),
            raw_response: record.raw_model_output.as_deref(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}
