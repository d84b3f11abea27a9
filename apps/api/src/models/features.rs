//! Per-document feature record produced by extraction and consumed,
//! read-only, by the scoring stage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extraction::contact::Contact;
use crate::extraction::sections::SECTION_HEADINGS;

/// Normalized signals for one submitted file. Immutable once produced:
/// scoring only reads it, never mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFeatures {
    pub filename: String,
    pub raw_text: String,
    pub image_count: u32,
    pub table_count: u32,
    pub contact: Contact,
    /// Presence flag per fixed section heading; every key always present.
    pub sections: BTreeMap<String, bool>,
    /// Highest detected degree label, or `""`.
    pub degree: String,
    pub experience_years: f64,
    pub summary: String,
    /// Set when decoding failed; the record still ranks, at the floor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

impl DocumentFeatures {
    /// Zeroed record for a file whose decoding failed. Keeps the file in
    /// the batch so it ranks at the bottom instead of being dropped.
    pub fn degraded(filename: String, reason: String) -> Self {
        DocumentFeatures {
            filename,
            raw_text: String::new(),
            image_count: 0,
            table_count: 0,
            contact: Contact::unknown(),
            sections: SECTION_HEADINGS
                .iter()
                .map(|h| (h.to_string(), false))
                .collect(),
            degree: String::new(),
            experience_years: 0.0,
            summary: String::new(),
            extraction_error: Some(reason),
        }
    }
}
