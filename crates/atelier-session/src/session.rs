//! The session and its submit transaction.
//!
//! One session per user, exclusively owning its history. Submission is a
//! single logical transaction — append placeholder, call the model, then
//! commit or discard — and `&mut self` makes interleaved submissions
//! unrepresentable.

use serde::Serialize;
use tracing::{info, warn};

use atelier_core::models::evaluation::NormalizedEvaluation;
use atelier_core::models::image;
use atelier_core::models::iteration::EvaluationMode;
use atelier_core::models::token_count::TokenUsage;
use atelier_openai::client::MODEL_ID;
use atelier_openai::content;
use atelier_openai::context::ComparisonContext;
use atelier_openai::extract::extract_standard;
use atelier_openai::model::CritiqueModel;
use atelier_openai::parse::parse_structured;
use atelier_openai::{prompts, tokens};

use crate::error::SessionError;
use crate::language::OutputLanguage;
use crate::store::IterationStore;

/// What the display layer needs after a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub sequence_index: u32,
    pub mode: EvaluationMode,
    /// `None` when the reply could not be normalized; the raw output is
    /// still committed to the record for inspection.
    pub evaluation: Option<NormalizedEvaluation>,
    pub usage: Option<TokenUsage>,
}

/// Running statistics over the session history.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressStats {
    pub iterations: usize,
    pub first_average: Option<f64>,
    pub latest_average: Option<f64>,
    pub delta: Option<f64>,
}

/// A user session: the iteration store, the output language, and the
/// model behind the critique calls.
pub struct Session<M> {
    model: M,
    store: IterationStore,
    output_language: OutputLanguage,
}

impl<M: CritiqueModel> Session<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            store: IterationStore::new(),
            output_language: OutputLanguage::default(),
        }
    }

    pub fn store(&self) -> &IterationStore {
        &self.store
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn output_language(&self) -> OutputLanguage {
        self.output_language
    }

    pub fn set_output_language(&mut self, language: OutputLanguage) {
        self.output_language = language;
    }

    /// Clear the full history. Explicit user action; sequence numbering
    /// restarts at 1.
    pub fn clear_history(&mut self) {
        info!(discarded = self.store.count(), "clearing session history");
        self.store.clear();
    }

    /// Submit an uploaded image for evaluation.
    ///
    /// On any model failure the just-appended placeholder is rolled back,
    /// leaving the store identical to its pre-submission state; the user
    /// may resubmit, which re-enters the pipeline with a fresh placeholder.
    pub async fn submit(
        &mut self,
        filename: &str,
        declared_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<SubmitOutcome, SessionError> {
        let payload = image::ingest(filename, declared_type, bytes)?;
        let sequence_index = self.store.append_placeholder(payload, filename);

        let context = ComparisonContext::build(self.store.all())
            .ok_or(SessionError::NotFound(sequence_index))?;
        let mode = context.mode();

        info!(sequence_index, %mode, "starting evaluation");

        let system_prompt = prompts::system_prompt(mode, self.output_language.as_str());
        let user_content = match mode {
            EvaluationMode::Standalone => content::build_standalone_content(context.current),
            EvaluationMode::Comparison => match content::build_comparison_content(&context) {
                Ok(blocks) => blocks,
                Err(e) => {
                    self.store.discard(sequence_index)?;
                    return Err(e.into());
                }
            },
        };

        let reply = match self.model.evaluate(&system_prompt, &user_content).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(sequence_index, error = %e, "model call failed; rolling back placeholder");
                self.store.discard(sequence_index)?;
                return Err(e.into());
            }
        };

        let structured = parse_structured(&reply.text);
        let evaluation = structured.as_ref().and_then(|s| extract_standard(s, mode));
        if evaluation.is_none() {
            warn!(sequence_index, "reply yielded no normalized evaluation; committing raw output");
        }

        self.store
            .commit(sequence_index, evaluation.clone(), reply.text, structured)?;

        info!(sequence_index, evaluated = evaluation.is_some(), "evaluation committed");

        Ok(SubmitOutcome {
            sequence_index,
            mode,
            evaluation,
            usage: reply.usage.map(|t| tokens::usage_for(t, MODEL_ID)),
        })
    }

    /// First/latest average scores and their delta, for the stats panel.
    pub fn progress(&self) -> ProgressStats {
        let average_of = |record: Option<&atelier_core::models::iteration::IterationRecord>| {
            record
                .and_then(|r| r.evaluation.as_ref())
                .filter(|e| !e.is_empty())
                .map(|e| e.average())
        };
        let first_average = average_of(self.store.first());
        let latest_average = average_of(self.store.last());
        ProgressStats {
            iterations: self.store.count(),
            first_average,
            latest_average,
            delta: first_average
                .zip(latest_average)
                .map(|(first, latest)| latest - first),
        }
    }
}
