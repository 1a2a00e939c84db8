//! Normalized evaluations.
//!
//! The reduced per-category `{score, feedback}` view of a model critique,
//! used for display, averaging, and export. Categories the model omitted
//! are simply absent — omission means "no data", never "score zero".

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use atelier_rubric::Category;

/// One category's normalized score and feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,
    /// Integer score in 1..=10.
    pub score: u8,
    pub feedback: String,
}

/// A normalized evaluation: the present categories in rubric order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEvaluation {
    pub entries: Vec<CategoryScore>,
}

impl NormalizedEvaluation {
    pub fn new(entries: Vec<CategoryScore>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryScore> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn score_for(&self, category: Category) -> Option<u8> {
        self.get(category).map(|e| e.score)
    }

    /// Arithmetic mean of all present scores.
    ///
    /// Returns `0.0` when no categories are present — a sentinel for
    /// "undefined", not a real score. Display layers special-case it.
    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.entries.iter().map(|e| f64::from(e.score)).sum();
        sum / self.entries.len() as f64
    }
}

#[derive(Serialize)]
struct EntryBodyRef<'a> {
    score: u8,
    feedback: &'a str,
}

#[derive(Deserialize)]
struct EntryBody {
    score: u8,
    #[serde(default)]
    feedback: String,
}

// Serializes as a map keyed by category display name, matching the shape
// the export documents use:
// `{"Composition and Design": {"score": 7, "feedback": "..."}, ...}`.
impl Serialize for NormalizedEvaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                entry.category.name(),
                &EntryBodyRef {
                    score: entry.score,
                    feedback: &entry.feedback,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NormalizedEvaluation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EvaluationVisitor;

        impl<'de> Visitor<'de> for EvaluationVisitor {
            type Value = NormalizedEvaluation;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to {score, feedback}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    match Category::from_name(&key) {
                        Some(category) => {
                            let body: EntryBody = map.next_value()?;
                            entries.push(CategoryScore {
                                category,
                                score: body.score,
                                feedback: body.feedback,
                            });
                        }
                        // Unknown keys are tolerated, not errors.
                        None => {
                            let _: IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(NormalizedEvaluation { entries })
            }
        }

        deserializer.deserialize_map(EvaluationVisitor)
    }
}
