//! atelier-rubric
//!
//! The fixed evaluation rubric. Pure data — no network dependency.
//! Defines the closed set of critique categories, the valid score range,
//! and the presentational score bands.

pub mod category;
pub mod scoring;

pub use category::Category;
pub use scoring::{band_for, ScoreBand, ScoreRange, SCORE_RANGE};
