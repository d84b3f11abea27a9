//! Highest-degree detection against a fixed pattern table.

use once_cell::sync::Lazy;
use regex::Regex;

/// Degree labels in display form. `""` means no degree detected.
pub const PHD: &str = "PhD";
pub const MASTERS: &str = "Masters";
pub const BACHELORS: &str = "Bachelors";
pub const DIPLOMA: &str = "Diploma";

/// Pattern → label table, ordered highest level first. Presence test
/// only: the first matching pattern wins, multiple degrees never combine.
static DEGREE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\b(ph\.?d|doctorate)\b").unwrap(), PHD),
        (
            Regex::new(r"(?i)\b(m\.?tech|m\.?sc|masters?|post\s*graduate|pg)\b").unwrap(),
            MASTERS,
        ),
        (
            Regex::new(r"(?i)\b(b\.?tech|b\.?e\.|b\.?sc|bachelors?)\b").unwrap(),
            BACHELORS,
        ),
        (Regex::new(r"(?i)\b(diploma)\b").unwrap(), DIPLOMA),
    ]
});

/// Returns the highest degree level whose pattern matches anywhere in the
/// text, or `""` when none match.
pub fn highest_degree(text: &str) -> &'static str {
    for (pattern, label) in DEGREE_PATTERNS.iter() {
        if pattern.is_match(text) {
            return label;
        }
    }
    ""
}

/// Ordinal rank used for min-degree comparison. Unknown labels rank 0.
pub fn degree_rank(degree: &str) -> u8 {
    match degree {
        DIPLOMA => 1,
        BACHELORS => 2,
        MASTERS => 3,
        PHD => 4,
        _ => 0,
    }
}
