//! Plain-text report rendering — a pure consumer of the ranked result
//! list plus the requirement summary. No score is recomputed here.

use crate::models::requirements::{
    WEIGHT_ATS, WEIGHT_EDUCATION, WEIGHT_EXPERIENCE, WEIGHT_SKILLS,
};
use crate::pipeline::handlers::AnalyzeResponse;

const MAX_REPORT_ROWS: usize = 200;

const COLUMNS: &[(&str, usize)] = &[
    ("Rank", 5),
    ("Candidate", 22),
    ("Email", 28),
    ("Phone", 18),
    ("Degree", 10),
    ("Exp", 6),
    ("Total %", 8),
];

/// Renders the ranked results as a fixed-width text table with a
/// requirement summary header. Rows are capped at 200.
pub fn render_report(payload: &AnalyzeResponse) -> String {
    let mut out = String::new();

    out.push_str("ATS Resume Scanner Report\n");
    out.push_str(&format!(
        "Date: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d")
    ));

    out.push_str(&format!("Job Role: {}\n", payload.job_role));
    out.push_str(&format!(
        "Required Skills: {}\n",
        payload.required_skills.join(", ")
    ));
    out.push_str(&format!(
        "Min Degree: {}    Min Experience: {}\n",
        display_or_dash(&payload.min_degree),
        payload
            .min_experience_years
            .map(|y| y.to_string())
            .unwrap_or_else(|| "—".to_string())
    ));

    if let Some(first) = payload.results.first() {
        let w = &first.weights;
        out.push_str(&format!(
            "Weights — Skills: {} | Experience: {} | Education: {} | ATS: {}\n",
            w.get(WEIGHT_SKILLS),
            w.get(WEIGHT_EXPERIENCE),
            w.get(WEIGHT_EDUCATION),
            w.get(WEIGHT_ATS),
        ));
    }
    out.push('\n');

    let header: String = COLUMNS
        .iter()
        .map(|(name, width)| cell(name, *width))
        .collect();
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(COLUMNS.iter().map(|(_, w)| w).sum()));
    out.push('\n');

    for r in payload.results.iter().take(MAX_REPORT_ROWS) {
        let row: String = [
            cell(&r.rank.to_string(), COLUMNS[0].1),
            cell(&r.candidate_name, COLUMNS[1].1),
            cell(&r.email, COLUMNS[2].1),
            cell(&r.phone, COLUMNS[3].1),
            cell(display_or_dash(&r.degree), COLUMNS[4].1),
            cell(&r.experience_years.to_string(), COLUMNS[5].1),
            cell(&r.total_score.to_string(), COLUMNS[6].1),
        ]
        .concat();
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}

/// Pads or truncates a value to its column width, leaving one space of
/// separation.
fn cell(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width - 1).collect();
    format!("{truncated:<width$}")
}
