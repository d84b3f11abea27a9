//! Ranked output record, one per input document.

use serde::{Deserialize, Serialize};

use crate::models::requirements::ScoreWeights;

/// Scored candidate with per-criterion breakdown. All score fields are
/// in `[0, 100]`, rounded to 2 decimal places; `rank` is stamped after
/// the batch-wide sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub rank: usize,
    pub filename: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub degree: String,
    pub experience_years: f64,
    pub skills_match: f64,
    pub education_match: f64,
    pub experience_score: f64,
    pub ats_format_score: f64,
    pub total_score: f64,
    /// Required skills not found, original order and casing preserved.
    pub missing_skills: Vec<String>,
    pub summary: String,
    /// Weight set used, echoed for report generation.
    pub weights: ScoreWeights,
}
