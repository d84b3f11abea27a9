//! Caller-supplied job requirement profile and criterion weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const WEIGHT_SKILLS: &str = "skills";
pub const WEIGHT_EXPERIENCE: &str = "experience";
pub const WEIGHT_EDUCATION: &str = "education";
pub const WEIGHT_ATS: &str = "ats";

/// Weight set for the weighted total. Modeled as an open map: callers
/// may supply extra keys, and the aggregate divides by the sum of all
/// weights actually supplied, so an unrecognized dimension dilutes the
/// four scored criteria rather than being silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreWeights(pub BTreeMap<String, f64>);

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights(BTreeMap::from([
            (WEIGHT_SKILLS.to_string(), 60.0),
            (WEIGHT_EXPERIENCE.to_string(), 20.0),
            (WEIGHT_EDUCATION.to_string(), 10.0),
            (WEIGHT_ATS.to_string(), 10.0),
        ]))
    }
}

impl ScoreWeights {
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    /// Sum of every supplied weight — the aggregation divisor.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// A usable weight set is all non-negative and not all zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.0.values().any(|&w| w < 0.0 || !w.is_finite()) {
            return Err("weights must be non-negative finite numbers".to_string());
        }
        if self.total() <= 0.0 {
            return Err("weights must not all be zero".to_string());
        }
        Ok(())
    }
}

/// One analysis request's requirement profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirements {
    pub job_role: String,
    pub required_skills: Vec<String>,
    /// Minimum degree label, or `""` for no constraint.
    #[serde(default)]
    pub min_degree: String,
    #[serde(default)]
    pub min_experience_years: Option<f64>,
    #[serde(default)]
    pub weights: ScoreWeights,
}
