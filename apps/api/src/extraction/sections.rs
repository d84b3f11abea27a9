//! Section-heading presence detection.

use std::collections::BTreeMap;

/// The fixed heading vocabulary. Detection is plain substring
/// containment, not word-boundary aware — a heading embedded in a longer
/// word still counts, matching observed scanner behavior.
pub const SECTION_HEADINGS: &[&str] = &[
    "education",
    "experience",
    "work experience",
    "professional experience",
    "skills",
    "technical skills",
    "projects",
    "certifications",
    "summary",
];

/// Flags presence of each fixed heading in the (raw) text.
/// Lower-cases the full text once; every heading key is present in the
/// returned map with an explicit boolean.
pub fn detect_sections(text: &str) -> BTreeMap<String, bool> {
    let lowered = text.to_lowercase();
    SECTION_HEADINGS
        .iter()
        .map(|h| (h.to_string(), lowered.contains(h)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_always_present() {
        let flags = detect_sections("");
        assert_eq!(flags.len(), SECTION_HEADINGS.len());
        assert!(flags.values().all(|&v| !v));
    }

    #[test]
    fn test_detects_case_insensitively() {
        let flags = detect_sections("EDUCATION\nB.Tech\nSKILLS\nPython");
        assert!(flags["education"]);
        assert!(flags["skills"]);
        assert!(!flags["projects"]);
    }

    #[test]
    fn test_work_experience_implies_experience() {
        // substring containment: "work experience" also matches "experience"
        let flags = detect_sections("Work Experience\nAcme Corp");
        assert!(flags["work experience"]);
        assert!(flags["experience"]);
    }

    #[test]
    fn test_embedded_heading_still_counts() {
        // not word-boundary aware, by observed behavior
        let flags = detect_sections("reskillsed workforce");
        assert!(flags["skills"]);
    }
}
