//! Assembles the per-document feature record from decoded text.

use crate::extraction::contact::parse_contact;
use crate::extraction::decode::DecodedDocument;
use crate::extraction::degree::highest_degree;
use crate::extraction::experience::estimate_years;
use crate::extraction::sections::detect_sections;
use crate::extraction::summary::extract_summary;
use crate::models::features::DocumentFeatures;

/// Per-document extraction outcome. Failures carry a reason instead of
/// aborting the batch; the aggregator consumes both arms uniformly.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Extracted(DocumentFeatures),
    Failed { filename: String, reason: String },
}

impl ExtractionOutcome {
    /// Collapses the outcome into a feature record: a failed extraction
    /// becomes a zeroed record carrying the error, still ranked.
    pub fn into_features(self) -> DocumentFeatures {
        match self {
            ExtractionOutcome::Extracted(features) => features,
            ExtractionOutcome::Failed { filename, reason } => {
                DocumentFeatures::degraded(filename, reason)
            }
        }
    }
}

/// Derives all feature groups from one decoded document. Each
/// sub-extractor tolerates empty input, so this is total.
pub fn extract_features(filename: &str, decoded: &DecodedDocument) -> DocumentFeatures {
    let text = &decoded.text;
    DocumentFeatures {
        filename: filename.to_string(),
        raw_text: text.clone(),
        image_count: decoded.image_count,
        table_count: decoded.table_count,
        contact: parse_contact(text),
        sections: detect_sections(text),
        degree: highest_degree(text).to_string(),
        experience_years: estimate_years(text),
        summary: extract_summary(text),
        extraction_error: None,
    }
}
