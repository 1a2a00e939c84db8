use serde::{Deserialize, Serialize};

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every per-category score the model returns must fall in this range.
pub const SCORE_RANGE: ScoreRange = ScoreRange { min: 1.0, max: 10.0 };

/// Presentational bucket for a score or an average of scores.
///
/// The thresholds are a display contract: badges, history entries, and any
/// downstream consumer of exported evaluations pin these boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 7.0 and above — good work with minor areas to refine.
    High,
    /// 5.0 up to (but excluding) 7.0 — basic level, noticeable areas to improve.
    Mid,
    /// Below 5.0 — significant improvement needed.
    Low,
}

impl ScoreBand {
    /// A short reader-facing description of what the band means, matching
    /// the scoring legend the system prompt gives the model.
    pub fn describe(&self) -> &'static str {
        match self {
            ScoreBand::High => "good to excellent work with minor areas to refine",
            ScoreBand::Mid => "basic level with noticeable areas for improvement",
            ScoreBand::Low => "significant improvement needed",
        }
    }
}

/// Classify a score into its presentational band.
pub fn band_for(score: f64) -> ScoreBand {
    if score >= 7.0 {
        ScoreBand::High
    } else if score >= 5.0 {
        ScoreBand::Mid
    } else {
        ScoreBand::Low
    }
}
