//! # resumelens-scoring
//!
//! Confidence estimation and weighted overall scoring over extracted
//! field candidates and the assembled resume record.
//!
//! Both stages are pure functions: the same inputs always produce the
//! same outputs, and neither mutates its arguments. Open date ranges
//! are closed against a caller-supplied reference date so scoring stays
//! deterministic under test.

pub mod confidence;
pub mod score;

pub use confidence::estimate_confidence;
pub use score::{score, score_breakdown, ScoreBreakdown};
