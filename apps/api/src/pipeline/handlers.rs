//! Axum route handlers for the analysis and report endpoints.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::requirements::{JobRequirements, ScoreWeights};
use crate::models::result::CandidateResult;
use crate::pipeline::{run_analysis, UploadedFile};
use crate::report::render_report;
use crate::state::AppState;

/// Response of `/api/v1/analyze`, and the sole input accepted by
/// `/api/v1/report` — the report endpoint recomputes nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub job_role: String,
    pub required_skills: Vec<String>,
    pub min_degree: String,
    pub min_experience_years: Option<f64>,
    pub count: usize,
    pub results: Vec<CandidateResult>,
}

/// POST /api/v1/analyze
///
/// Multipart form: repeated `files` parts plus `job_role`,
/// `required_skills` (comma-separated), optional `min_degree`,
/// `min_experience_years`, and `weights` (JSON object). Request-level
/// validation happens before any extraction work begins.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut files: Vec<UploadedFile> = Vec::new();
    let mut job_role = String::new();
    let mut required_skills: Vec<String> = Vec::new();
    let mut min_degree = String::new();
    let mut min_experience_years: Option<f64> = None;
    let mut weights = ScoreWeights::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                files.push(UploadedFile { filename, bytes });
            }
            "job_role" => {
                job_role = read_text(field).await?.trim().to_string();
            }
            "required_skills" => {
                required_skills = split_skills(&read_text(field).await?);
            }
            "min_degree" => {
                min_degree = read_text(field).await?.trim().to_string();
            }
            "min_experience_years" => {
                let raw = read_text(field).await?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    let parsed = raw.parse::<f64>().map_err(|_| {
                        AppError::Validation(
                            "min_experience_years must be a non-negative number".to_string(),
                        )
                    })?;
                    if parsed < 0.0 {
                        return Err(AppError::Validation(
                            "min_experience_years must be a non-negative number".to_string(),
                        ));
                    }
                    min_experience_years = Some(parsed);
                }
            }
            "weights" => {
                weights = serde_json::from_str(&read_text(field).await?)
                    .map_err(|e| AppError::Validation(format!("weights must be a JSON object of numbers: {e}")))?;
            }
            _ => {}
        }
    }

    if job_role.is_empty() || required_skills.is_empty() {
        return Err(AppError::Validation(
            "job_role and required_skills are required".to_string(),
        ));
    }
    if files.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }
    weights.validate().map_err(AppError::Validation)?;

    info!("Received {} resumes for analysis", files.len());

    let requirements = JobRequirements {
        job_role,
        required_skills,
        min_degree,
        min_experience_years,
        weights,
    };
    let results = run_analysis(state.decoder.as_ref(), &files, &requirements).await;

    info!("Analysis complete: {} candidates processed", results.len());

    Ok(Json(AnalyzeResponse {
        job_role: requirements.job_role,
        required_skills: requirements.required_skills,
        min_degree: requirements.min_degree,
        min_experience_years: requirements.min_experience_years,
        count: results.len(),
        results,
    }))
}

/// POST /api/v1/report
///
/// Renders an already-ranked result set as a plain-text attachment.
/// Pure presentation: the payload is the analyze response, echoed back
/// by the client.
pub async fn handle_report(Json(payload): Json<AnalyzeResponse>) -> Result<Response, AppError> {
    let report = render_report(&payload);
    let filename = format!(
        "ats_resume_report_{}.txt",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    info!("Report generated for {} candidates", payload.results.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        report,
    )
        .into_response())
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))
}

/// Splits the comma-separated skill list, trimming and dropping empties.
fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills_trims_and_drops_empties() {
        assert_eq!(
            split_skills("python, java , ,go,"),
            vec!["python", "java", "go"]
        );
    }

    #[test]
    fn test_split_skills_empty_input() {
        assert!(split_skills("").is_empty());
        assert!(split_skills(" , ,").is_empty());
    }

    #[test]
    fn test_analyze_response_round_trips_as_report_input() {
        let json = r#"{
            "job_role": "Backend Engineer",
            "required_skills": ["python"],
            "min_degree": "",
            "min_experience_years": null,
            "count": 0,
            "results": []
        }"#;
        let parsed: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.job_role, "Backend Engineer");
        assert_eq!(parsed.count, 0);
    }
}
