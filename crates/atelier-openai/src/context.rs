//! Comparison context selection.
//!
//! Given the session history, decides which records feed the next request
//! and in what role. Built fresh for every request; never stored.

use atelier_core::models::iteration::{EvaluationMode, IterationRecord};

/// The records anchoring the next evaluation request.
///
/// `first` lets the model judge long-run growth regardless of history
/// length; `previous` lets it judge the short-run delta. At exactly two
/// records the previous anchor is omitted — it would duplicate `first`.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonContext<'a> {
    pub first: Option<&'a IterationRecord>,
    pub previous: Option<&'a IterationRecord>,
    pub current: &'a IterationRecord,
}

impl<'a> ComparisonContext<'a> {
    /// Build the context for the newest record. Returns `None` on an empty
    /// history.
    pub fn build(records: &'a [IterationRecord]) -> Option<Self> {
        let current = records.last()?;
        let n = records.len();
        let (first, previous) = match n {
            1 => (None, None),
            2 => (records.first(), None),
            _ => (records.first(), records.get(n - 2)),
        };
        Some(Self {
            first,
            previous,
            current,
        })
    }

    /// Which prompt template this context calls for.
    pub fn mode(&self) -> EvaluationMode {
        if self.first.is_none() {
            EvaluationMode::Standalone
        } else {
            EvaluationMode::Comparison
        }
    }
}
