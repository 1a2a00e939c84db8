//! Full-log export: an audit trail of every request and response.
//!
//! Includes both system-prompt templates verbatim and, per iteration, a
//! reconstruction of what would have been sent (anchors and their
//! evaluations, without image bytes). An audit document, not a
//! re-importable format.

use serde::Serialize;
use serde_json::{json, Value};

use atelier_core::models::evaluation::NormalizedEvaluation;
use atelier_core::models::iteration::{EvaluationMode, IterationRecord};
use atelier_openai::client::{MAX_TOKENS, MODEL_ID, TEMPERATURE};
use atelier_openai::prompts::{COMPARISON_PROMPT, STANDALONE_PROMPT};

use crate::error::ExportError;

#[derive(Serialize)]
struct FullLogs<'a> {
    export_timestamp: jiff::Timestamp,
    total_iterations: usize,
    prompts: PromptTemplates,
    iterations: Vec<IterationLog<'a>>,
}

#[derive(Serialize)]
struct PromptTemplates {
    standalone: &'static str,
    comparison: &'static str,
}

#[derive(Serialize)]
struct IterationLog<'a> {
    iteration_number: u32,
    timestamp: &'a jiff::Timestamp,
    image_name: &'a str,
    mode: EvaluationMode,
    api_input: ApiInput,
    api_output: ApiOutput<'a>,
}

#[derive(Serialize)]
struct ApiInput {
    model: &'static str,
    temperature: f32,
    max_tokens: u32,
    /// Which template the request used, by name.
    system_prompt: &'static str,
    user_content: Value,
}

#[derive(Serialize)]
struct ApiOutput<'a> {
    raw_response: Option<&'a str>,
    parsed_response: Option<&'a Value>,
    evaluation: Option<&'a NormalizedEvaluation>,
}

/// Render the complete API audit log as pretty-printed JSON.
pub fn export_full_logs(records: &[IterationRecord]) -> Result<String, ExportError> {
    let iterations: Vec<IterationLog<'_>> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mode = if i == 0 {
                EvaluationMode::Standalone
            } else {
                EvaluationMode::Comparison
            };
            IterationLog {
                iteration_number: record.sequence_index,
                timestamp: &record.created_at,
                image_name: &record.image_name,
                mode,
                api_input: ApiInput {
                    model: MODEL_ID,
                    temperature: TEMPERATURE,
                    max_tokens: MAX_TOKENS,
                    system_prompt: match mode {
                        EvaluationMode::Standalone => "standalone",
                        EvaluationMode::Comparison => "comparison",
                    },
                    user_content: reconstruct_user_content(records, i),
                },
                api_output: ApiOutput {
                    raw_response: record.raw_model_output.as_deref(),
                    parsed_response: record.structured_model_output.as_ref(),
                    evaluation: record.evaluation.as_ref(),
                },
            }
        })
        .collect();

    let logs = FullLogs {
        export_timestamp: jiff::Timestamp::now(),
        total_iterations: records.len(),
        prompts: PromptTemplates {
            standalone: STANDALONE_PROMPT,
            comparison: COMPARISON_PROMPT,
        },
        iterations,
    };

    Ok(serde_json::to_string_pretty(&logs)?)
}

/// Describe the user content the request carried, without image bytes.
///
/// Follows the comparison policy: the anchor set for iteration `i`
/// (0-based) is first-only at i == 1 and first + previous from i == 2 on.
fn reconstruct_user_content(records: &[IterationRecord], i: usize) -> Value {
    if i == 0 {
        return json!({
            "type": "standalone",
            "image_name": records[0].image_name,
        });
    }

    let first = &records[0];
    let previous = (i > 1).then(|| &records[i - 1]);

    json!({
        "type": "comparison",
        "comparison_data": {
            "first_iteration": {
                "image_name": first.image_name,
                "evaluation": first.evaluation,
            },
            "previous_iteration": previous.map(|p| json!({
                "image_name": p.image_name,
                "evaluation": p.evaluation,
            })),
            "current_iteration": {
                "image_name": records[i].image_name,
            },
        },
    })
}
