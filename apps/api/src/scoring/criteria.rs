//! The three non-skill criterion scorers: education, experience, and
//! ATS format quality. All are pure, total, and return values in
//! `[0, 100]`.

use std::collections::BTreeMap;

use crate::extraction::contact::Contact;
use crate::extraction::degree::degree_rank;
use crate::scoring::round2;

/// Sections whose presence earns the ATS format bonus.
const GOOD_SECTIONS: &[&str] = &["summary", "skills", "experience", "education"];

/// Minimum text length below which a document looks like a scan or a
/// failed extraction.
const MIN_TEXT_LEN: usize = 400;

/// Ordinal degree comparison. No minimum → 100. No detected degree → 0.
/// Meeting or exceeding the minimum → 100; any lower detected degree
/// gets a flat 50, not a gradient.
pub fn education_match_score(resume_degree: &str, min_degree: &str) -> f64 {
    if min_degree.is_empty() {
        return 100.0;
    }
    let want = degree_rank(min_degree);
    let have = degree_rank(resume_degree);
    if have == 0 {
        return 0.0;
    }
    if have >= want {
        100.0
    } else {
        50.0
    }
}

/// Tiered experience scoring.
///
/// - 0 years → 0.
/// - No minimum (absent or zero) → `min(100, years * 15)`.
/// - Minimum met → `min(100, 80 + (years - min) * 5)`.
/// - Minimum unmet → `max(20, 100 * years / max(1, min))`.
pub fn experience_score(years: f64, min_required: Option<f64>) -> f64 {
    if years <= 0.0 {
        return 0.0;
    }
    match min_required {
        Some(min) if min > 0.0 => {
            if years >= min {
                (80.0 + (years - min) * 5.0).min(100.0)
            } else {
                (100.0 * years / min.max(1.0)).max(20.0)
            }
        }
        _ => (years * 15.0).min(100.0),
    }
}

/// Format/parseability score. Starts at 100, penalizes embedded images
/// and tables, rewards the standard sections, and penalizes missing
/// contact channels or suspiciously short text.
pub fn ats_format_score(
    text: &str,
    image_count: u32,
    table_count: u32,
    contact: &Contact,
    sections: &BTreeMap<String, bool>,
) -> f64 {
    let mut score = 100.0;

    score -= (image_count as f64 * 5.0).min(30.0);
    score -= (table_count as f64 * 5.0).min(20.0);

    let good = GOOD_SECTIONS
        .iter()
        .filter(|&&s| sections.get(s).copied().unwrap_or(false))
        .count();
    score += good as f64 * 2.5;

    if !contact.is_reachable() {
        score -= 15.0;
    }
    if text.trim().len() < MIN_TEXT_LEN {
        score -= 25.0;
    }

    round2(score.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::sections::detect_sections;

    fn all_sections() -> BTreeMap<String, bool> {
        detect_sections("summary skills experience education projects")
    }

    fn reachable() -> Contact {
        Contact {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555 123 4567".into(),
        }
    }

    // Education

    #[test]
    fn test_education_exceeds_minimum() {
        assert_eq!(education_match_score("PhD", "Bachelors"), 100.0);
    }

    #[test]
    fn test_education_below_minimum_partial_credit() {
        assert_eq!(education_match_score("Diploma", "Masters"), 50.0);
    }

    #[test]
    fn test_education_none_detected() {
        assert_eq!(education_match_score("", "Bachelors"), 0.0);
    }

    #[test]
    fn test_education_no_constraint() {
        assert_eq!(education_match_score("", ""), 100.0);
        assert_eq!(education_match_score("PhD", ""), 100.0);
    }

    #[test]
    fn test_education_exact_match() {
        assert_eq!(education_match_score("Masters", "Masters"), 100.0);
    }

    // Experience

    #[test]
    fn test_experience_zero_years() {
        assert_eq!(experience_score(0.0, Some(5.0)), 0.0);
        assert_eq!(experience_score(0.0, None), 0.0);
    }

    #[test]
    fn test_experience_no_minimum_linear_capped() {
        assert_eq!(experience_score(2.0, None), 30.0);
        assert_eq!(experience_score(10.0, None), 100.0);
    }

    #[test]
    fn test_experience_zero_minimum_treated_as_none() {
        assert_eq!(experience_score(2.0, Some(0.0)), 30.0);
    }

    #[test]
    fn test_experience_minimum_met() {
        assert_eq!(experience_score(5.0, Some(5.0)), 80.0);
        assert_eq!(experience_score(7.0, Some(5.0)), 90.0);
        assert_eq!(experience_score(20.0, Some(5.0)), 100.0);
    }

    #[test]
    fn test_experience_shortfall_linear_floored() {
        assert_eq!(experience_score(2.0, Some(5.0)), 40.0);
        assert_eq!(experience_score(0.5, Some(10.0)), 20.0);
    }

    // ATS format

    #[test]
    fn test_ats_perfect_document_caps_at_100() {
        let text = "x".repeat(400);
        let score = ats_format_score(&text, 0, 0, &reachable(), &all_sections());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_ats_image_penalty_capped() {
        let text = "x".repeat(400);
        let few = ats_format_score(&text, 2, 0, &reachable(), &all_sections());
        let many = ats_format_score(&text, 50, 0, &reachable(), &all_sections());
        assert_eq!(few, 100.0); // 100 - 10 + 10 bonus
        assert_eq!(many, 80.0); // image penalty capped at 30
    }

    #[test]
    fn test_ats_table_penalty_capped() {
        let text = "x".repeat(400);
        let score = ats_format_score(&text, 0, 10, &reachable(), &all_sections());
        assert_eq!(score, 90.0); // table penalty capped at 20
    }

    #[test]
    fn test_ats_missing_contact_penalty() {
        let text = "x".repeat(400);
        let score = ats_format_score(&text, 0, 0, &Contact::unknown(), &all_sections());
        assert_eq!(score, 85.0);
    }

    #[test]
    fn test_ats_short_text_penalty() {
        let score = ats_format_score("short", 0, 0, &reachable(), &all_sections());
        assert_eq!(score, 85.0);
    }

    #[test]
    fn test_ats_worst_case_stacks_penalties() {
        let empty = detect_sections("");
        let score = ats_format_score("", 50, 50, &Contact::unknown(), &empty);
        assert_eq!(score, 10.0); // 100 - 30 - 20 - 15 - 25
    }
}
