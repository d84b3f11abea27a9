//! Years-of-experience estimate from two independent text heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

static EXPLICIT_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s+years?").unwrap());

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\s+\d{4}\s*(?:-|to|–|—)\s*(?:present|current|\d{4})",
    )
    .unwrap()
});

/// Best-effort years estimate:
///
/// 1. Every explicit "`N[+] year(s)`" phrase contributes its value; the
///    maximum found is one candidate.
/// 2. The count of month-name + 4-digit-year date ranges (e.g.
///    "Jan 2019 - Present") is the other candidate. Range count stands
///    in for years — a crude job-count ≈ tenure proxy, kept as a
///    documented limitation.
///
/// Final estimate is the max of the two, 0.0 when neither signal fires.
pub fn estimate_years(text: &str) -> f64 {
    let explicit_max = EXPLICIT_YEARS_RE
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .fold(0.0_f64, f64::max);

    let range_count = DATE_RANGE_RE.find_iter(text).count() as f64;

    explicit_max.max(range_count)
}
