//! Weighted aggregation and ranking.
//!
//! Two-pass design: compute every candidate's scores unranked, stable
//! sort by total descending, then stamp dense 1-based ranks. Rank
//! therefore always reflects final total-score order regardless of
//! input order, and ties keep input order.

use std::cmp::Ordering;

use crate::models::features::DocumentFeatures;
use crate::models::requirements::{
    JobRequirements, WEIGHT_ATS, WEIGHT_EDUCATION, WEIGHT_EXPERIENCE, WEIGHT_SKILLS,
};
use crate::models::result::CandidateResult;
use crate::scoring::criteria::{ats_format_score, education_match_score, experience_score};
use crate::scoring::round2;
use crate::scoring::skills::match_skills;

/// Scores one feature record against the requirements. Pure: same
/// inputs always produce the identical result.
fn score_candidate(features: &DocumentFeatures, requirements: &JobRequirements) -> CandidateResult {
    let skills = match_skills(&features.raw_text, &requirements.required_skills);
    let education = education_match_score(&features.degree, &requirements.min_degree);
    let experience = experience_score(
        features.experience_years,
        requirements.min_experience_years,
    );
    let ats = ats_format_score(
        &features.raw_text,
        features.image_count,
        features.table_count,
        &features.contact,
        &features.sections,
    );

    let weights = &requirements.weights;
    // Divide by the sum of every supplied weight, not just the four
    // scored keys: an extra dimension in the set dilutes the total.
    let denominator = weights.total();
    let total = if denominator > 0.0 {
        (skills.score * weights.get(WEIGHT_SKILLS)
            + experience * weights.get(WEIGHT_EXPERIENCE)
            + education * weights.get(WEIGHT_EDUCATION)
            + ats * weights.get(WEIGHT_ATS))
            / denominator
    } else {
        0.0
    };

    CandidateResult {
        rank: 0, // stamped after the batch-wide sort
        filename: features.filename.clone(),
        candidate_name: features.contact.name.clone(),
        email: features.contact.email.clone(),
        phone: features.contact.phone.clone(),
        degree: features.degree.clone(),
        experience_years: (features.experience_years * 10.0).round() / 10.0,
        skills_match: skills.score,
        education_match: round2(education),
        experience_score: round2(experience),
        ats_format_score: ats,
        total_score: round2(total),
        missing_skills: skills.missing_skills,
        summary: features.summary.clone(),
        weights: weights.clone(),
    }
}

/// Scores every feature record, sorts by total descending (stable, so
/// input order breaks ties), and stamps dense 1-based ranks.
pub fn rank_candidates(
    features: &[DocumentFeatures],
    requirements: &JobRequirements,
) -> Vec<CandidateResult> {
    let mut results: Vec<CandidateResult> = features
        .iter()
        .map(|f| score_candidate(f, requirements))
        .collect();

    results.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    for (idx, result) in results.iter_mut().enumerate() {
        result.rank = idx + 1;
    }
    results
}
