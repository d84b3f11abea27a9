//! Scoring pipeline: skill matching, criterion scorers, and the
//! weighted aggregator/ranker.

pub mod criteria;
pub mod ranker;
pub mod skills;

/// Rounds to 2 decimal places, the precision of every reported score.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
