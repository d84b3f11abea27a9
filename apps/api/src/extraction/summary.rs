//! First-sentences summary for report display.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Returns the first three sentence-like spans (terminated by `.`, `!`
/// or `?`) joined with single spaces. Empty string when the text has no
/// sentence boundary at all.
pub fn extract_summary(text: &str) -> String {
    SENTENCE_RE
        .find_iter(text)
        .take(3)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
