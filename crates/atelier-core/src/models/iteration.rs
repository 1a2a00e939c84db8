use std::fmt;

use serde::{Deserialize, Serialize};

use super::evaluation::NormalizedEvaluation;
use super::image::ImagePayload;

/// Which prompt template and extraction rules a submission uses.
///
/// The first submission in a session is evaluated standalone; every later
/// submission is evaluated in comparison against the session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    Standalone,
    Comparison,
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Standalone => f.write_str("standalone"),
            EvaluationMode::Comparison => f.write_str("comparison"),
        }
    }
}

/// One user submission: the uploaded image plus its (possibly absent)
/// evaluation.
///
/// A record is appended as a placeholder (`evaluation = None`) before the
/// model call resolves, then filled in place. `sequence_index` is 1-based
/// and immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationRecord {
    pub sequence_index: u32,
    pub image_name: String,
    pub image: ImagePayload,
    pub created_at: jiff::Timestamp,
    pub evaluation: Option<NormalizedEvaluation>,
    pub raw_model_output: Option<String>,
    pub structured_model_output: Option<serde_json::Value>,
}

impl IterationRecord {
    /// Create a placeholder record awaiting its model call.
    pub fn placeholder(
        sequence_index: u32,
        image: ImagePayload,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            sequence_index,
            image_name: image_name.into(),
            image,
            created_at: jiff::Timestamp::now(),
            evaluation: None,
            raw_model_output: None,
            structured_model_output: None,
        }
    }

    /// Whether the model call for this record has resolved to a usable
    /// evaluation. A committed record with unparseable output stays `false`.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }
}
