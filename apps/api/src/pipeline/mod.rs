//! Request orchestration: decode each uploaded file, extract features,
//! then score and rank the whole batch.

pub mod handlers;

use bytes::Bytes;
use tracing::warn;

use crate::extraction::decode::DocumentDecoder;
use crate::extraction::features::{extract_features, ExtractionOutcome};
use crate::models::features::DocumentFeatures;
use crate::models::requirements::JobRequirements;
use crate::models::result::CandidateResult;
use crate::scoring::ranker::rank_candidates;

/// One uploaded document: filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Runs the full batch. Documents are processed independently; a decode
/// failure is caught per file and becomes a degraded record, so every
/// input yields exactly one result and one bad file never aborts the
/// batch. The sort-then-rank step inside `rank_candidates` is the only
/// point that needs the whole batch.
pub async fn run_analysis(
    decoder: &dyn DocumentDecoder,
    files: &[UploadedFile],
    requirements: &JobRequirements,
) -> Vec<CandidateResult> {
    let mut extracted: Vec<DocumentFeatures> = Vec::with_capacity(files.len());
    for file in files {
        let outcome = match decoder.decode(&file.filename, &file.bytes).await {
            Ok(decoded) => {
                ExtractionOutcome::Extracted(extract_features(&file.filename, &decoded))
            }
            Err(e) => {
                warn!("Failed to decode {}: {e}", file.filename);
                ExtractionOutcome::Failed {
                    filename: file.filename.clone(),
                    reason: e.to_string(),
                }
            }
        };
        extracted.push(outcome.into_features());
    }

    rank_candidates(&extracted, requirements)
}
