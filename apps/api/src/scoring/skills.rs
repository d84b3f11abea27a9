//! Synonym-aware skill matching against normalized resume text.

use std::collections::HashSet;

use crate::extraction::normalize::{normalize, tokenize};
use crate::scoring::round2;

/// Fixed bidirectional alias table: canonical short form ↔ longer
/// spellings. A required skill equal to either side of an entry expands
/// to the whole equivalence class. No stemming or fuzzy matching —
/// plurals and hyphenation variants are out of scope on purpose.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("js", &["javascript"]),
    ("node", &["nodejs", "node.js"]),
    ("react", &["reactjs", "react.js"]),
    ("aws", &["amazon web services"]),
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
];

/// Builds the variant set for one required skill: the skill itself,
/// plus the canonical key and all its aliases when the skill matches
/// either side of a table entry.
pub fn expand_skill(skill: &str) -> Vec<String> {
    let s = skill.trim().to_lowercase();
    let mut variants = vec![s.clone()];
    for (key, aliases) in SYNONYMS {
        if s == *key || aliases.contains(&s.as_str()) {
            for v in std::iter::once(*key).chain(aliases.iter().copied()) {
                if !variants.iter().any(|existing| existing == v) {
                    variants.push(v.to_string());
                }
            }
        }
    }
    variants
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// `100 * hits / total_required`, rounded to 2 decimals.
    pub score: f64,
    /// Unmatched skills in original input order and casing.
    pub missing_skills: Vec<String>,
}

/// Determines which required skills appear in the resume text. A skill
/// counts as found when any variant occurs as a substring of the
/// normalized text or as an exact whitespace-delimited token.
pub fn match_skills(resume_text: &str, required_skills: &[String]) -> SkillMatch {
    let text = normalize(resume_text);
    let tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let mut hits = 0usize;
    let mut missing_skills = Vec::new();
    for skill in required_skills {
        let found = expand_skill(skill)
            .iter()
            .any(|v| text.contains(v.as_str()) || tokens.contains(v));
        if found {
            hits += 1;
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let score = if required_skills.is_empty() {
        0.0
    } else {
        round2(100.0 * hits as f64 / required_skills.len() as f64)
    };

    SkillMatch {
        score,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_direct_substring_hit() {
        let m = match_skills("experienced python developer", &skills(&["python"]));
        assert_eq!(m.score, 100.0);
        assert!(m.missing_skills.is_empty());
    }

    #[test]
    fn test_half_hit_rate() {
        let m = match_skills("knows python well", &skills(&["python", "java"]));
        assert_eq!(m.score, 50.0);
        assert_eq!(m.missing_skills, vec!["java"]);
    }

    #[test]
    fn test_alias_expands_to_long_form() {
        // requirement says "js", resume says "javascript"
        let m = match_skills("senior javascript engineer", &skills(&["js"]));
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_long_form_expands_to_alias() {
        // requirement says "javascript", resume says "js"
        let m = match_skills("wrote js for ten teams", &skills(&["javascript"]));
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_multiword_alias() {
        let m = match_skills("deployed on amazon web services", &skills(&["aws"]));
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_missing_preserves_casing_and_order() {
        let m = match_skills("", &skills(&["Python", "AWS", "Go"]));
        assert_eq!(m.missing_skills, vec!["Python", "AWS", "Go"]);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let m = match_skills("python java go", &[]);
        assert_eq!(m.score, 0.0);
        assert!(m.missing_skills.is_empty());
    }

    #[test]
    fn test_rounding_two_decimals() {
        let m = match_skills("python", &skills(&["python", "java", "go"]));
        assert_eq!(m.score, 33.33);
    }

    #[test]
    fn test_expand_skill_includes_self() {
        assert_eq!(expand_skill("python"), vec!["python"]);
        let node = expand_skill("node.js");
        assert!(node.contains(&"node".to_string()));
        assert!(node.contains(&"nodejs".to_string()));
        assert!(node.contains(&"node.js".to_string()));
    }
}
