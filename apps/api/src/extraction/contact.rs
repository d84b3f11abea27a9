//! Contact identity extraction — first email, first phone-like run, and a
//! first-qualifying-line name heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s().-]{7,}\d").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn unknown() -> Self {
        Contact {
            name: "Unknown".to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }

    /// Both contact channels present. Consulted by the ATS format scorer.
    pub fn is_reachable(&self) -> bool {
        !self.email.is_empty() && !self.phone.is_empty()
    }
}

/// Extracts contact info from raw (un-normalized) resume text.
///
/// The name heuristic takes the first trimmed non-empty line that has no
/// digit, is not itself an email or phone match, and has at most 5
/// whitespace-separated words. This is intentionally crude line-order
/// pattern matching; resumes that open with a headline instead of a name
/// will mislabel, and that behavior is kept as-is.
pub fn parse_contact(text: &str) -> Contact {
    let email = EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let name = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .find(|l| {
            !l.chars().any(|c| c.is_ascii_digit())
                && !EMAIL_RE.is_match(l)
                && !PHONE_RE.is_match(l)
                && l.split_whitespace().count() <= 5
        })
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown".to_string());

    Contact { name, email, phone }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_email() {
        let c = parse_contact("reach me at jane.doe@example.com or doe@corp.io");
        assert_eq!(c.email, "jane.doe@example.com");
    }

    #[test]
    fn test_finds_phone_with_separators() {
        let c = parse_contact("call +1 (555) 123-4567 anytime");
        assert_eq!(c.phone, "+1 (555) 123-4567");
    }

    #[test]
    fn test_no_contact_in_plain_prose() {
        let c = parse_contact("an experienced engineer");
        assert_eq!(c.email, "");
        assert_eq!(c.phone, "");
    }

    #[test]
    fn test_name_is_first_qualifying_line() {
        let text = "Jane Doe\njane@example.com\n+91 9876543210\nSoftware Engineer";
        assert_eq!(parse_contact(text).name, "Jane Doe");
    }

    #[test]
    fn test_name_skips_lines_with_digits() {
        let text = "5 years experience\nJohn Smith\n";
        assert_eq!(parse_contact(text).name, "John Smith");
    }

    #[test]
    fn test_name_skips_long_headline() {
        let text = "Results driven engineer with a decade of shipping\nAda Lovelace\n";
        assert_eq!(parse_contact(text).name, "Ada Lovelace");
    }

    #[test]
    fn test_name_defaults_to_unknown() {
        assert_eq!(parse_contact("").name, "Unknown");
        assert_eq!(parse_contact("line with 42 digits only").name, "Unknown");
    }

    #[test]
    fn test_reachable_requires_both_channels() {
        let mut c = Contact::unknown();
        assert!(!c.is_reachable());
        c.email = "a@b.co".into();
        assert!(!c.is_reachable());
        c.phone = "123456789".into();
        assert!(c.is_reachable());
    }
}
