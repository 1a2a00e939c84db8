//! The append-only iteration store.
//!
//! The single source of truth for session history. Indices are 1-based,
//! contiguous, and strictly increasing; the store never reorders or
//! removes a committed record except on an explicit full clear. The only
//! removal path is rolling back the most recently appended placeholder
//! after a failed model call.

use serde_json::Value;

use atelier_core::models::evaluation::NormalizedEvaluation;
use atelier_core::models::image::ImagePayload;
use atelier_core::models::iteration::IterationRecord;

use crate::error::SessionError;

#[derive(Debug, Default)]
pub struct IterationStore {
    records: Vec<IterationRecord>,
}

impl IterationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placeholder record awaiting its model call. Returns the
    /// assigned sequence index.
    pub fn append_placeholder(
        &mut self,
        image: ImagePayload,
        image_name: impl Into<String>,
    ) -> u32 {
        let sequence_index = self.records.len() as u32 + 1;
        self.records
            .push(IterationRecord::placeholder(sequence_index, image, image_name));
        sequence_index
    }

    /// Fill in the evaluation fields of an addressed record.
    ///
    /// `evaluation` may be `None` when the model reply could not be
    /// normalized — the record still commits with its raw output preserved.
    pub fn commit(
        &mut self,
        sequence_index: u32,
        evaluation: Option<NormalizedEvaluation>,
        raw_model_output: String,
        structured_model_output: Option<Value>,
    ) -> Result<(), SessionError> {
        let record = self
            .record_mut(sequence_index)
            .ok_or(SessionError::NotFound(sequence_index))?;
        record.evaluation = evaluation;
        record.raw_model_output = Some(raw_model_output);
        record.structured_model_output = structured_model_output;
        Ok(())
    }

    /// Roll back a placeholder after a failed model call.
    ///
    /// Only the most recently appended record may be discarded — there is
    /// no mid-history deletion.
    pub fn discard(&mut self, sequence_index: u32) -> Result<(), SessionError> {
        let count = self.records.len() as u32;
        if sequence_index == 0 || sequence_index > count {
            return Err(SessionError::NotFound(sequence_index));
        }
        if sequence_index != count {
            return Err(SessionError::NotLast(sequence_index));
        }
        self.records.pop();
        Ok(())
    }

    /// Empty the store. The next append is assigned index 1 again.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn all(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&IterationRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    fn record_mut(&mut self, sequence_index: u32) -> Option<&mut IterationRecord> {
        let slot = sequence_index.checked_sub(1)? as usize;
        self.records.get_mut(slot)
    }
}
