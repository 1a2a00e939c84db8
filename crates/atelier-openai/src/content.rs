//! User-message content assembly.
//!
//! Renders the chosen context into the ordered block sequence the
//! chat-completions API expects. Comparison requests interleave a role
//! label, the image, and (for historical anchors) the stored evaluation
//! text, so the model sees the exact prior judgment rather than just the
//! image.

use serde::{Deserialize, Serialize};

use atelier_core::models::iteration::IterationRecord;

use crate::context::ComparisonContext;
use crate::error::OpenAiError;

/// One block of a user message, tagged `text` or `image_url` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: String,
}

impl ContentBlock {
    fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    fn image(record: &IterationRecord) -> Self {
        ContentBlock::ImageUrl {
            image_url: ImageUrl {
                url: record.image.to_data_uri(),
                detail: "high".to_string(),
            },
        }
    }
}

/// Content for a standalone evaluation: one instruction, one image.
pub fn build_standalone_content(current: &IterationRecord) -> Vec<ContentBlock> {
    vec![
        ContentBlock::text("This is a portrait painted by a student. Please evaluate it."),
        ContentBlock::image(current),
    ]
}

/// Content for a comparison evaluation.
///
/// Fixed order: first, previous (when present), current. Each image is
/// preceded by a label identifying its role; first and previous are
/// followed by their stored evaluation serialized as JSON.
pub fn build_comparison_content(
    context: &ComparisonContext<'_>,
) -> Result<Vec<ContentBlock>, OpenAiError> {
    let mut content = Vec::new();

    if let Some(first) = context.first {
        content.push(ContentBlock::text("=== FIRST ITERATION (Initial Portrait) ==="));
        content.push(ContentBlock::image(first));
        content.push(ContentBlock::text(format!(
            "First iteration expert evaluation:\n{}",
            serde_json::to_string_pretty(&first.evaluation)?
        )));
    }

    if let Some(previous) = context.previous {
        content.push(ContentBlock::text(
            "=== PREVIOUS ITERATION (Most Recent Before Current) ===",
        ));
        content.push(ContentBlock::image(previous));
        content.push(ContentBlock::text(format!(
            "Previous iteration expert evaluation:\n{}",
            serde_json::to_string_pretty(&previous.evaluation)?
        )));
    }

    content.push(ContentBlock::text("=== CURRENT ITERATION (To Be Evaluated) ==="));
    content.push(ContentBlock::image(context.current));
    content.push(ContentBlock::text(
        "Please analyze the current portrait, compare it with the previous iterations, \
         and provide a comprehensive evaluation.",
    ));

    Ok(content)
}
