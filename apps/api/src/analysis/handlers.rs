//! The analyze endpoint: multipart upload → extract → score → advise.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::{extract_text, FileFormat};
use crate::state::AppState;

use super::similarity::hybrid_similarity;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub match_score: f64,
    pub suggestions: Vec<String>,
}

/// POST /api/v1/analyze
///
/// Multipart form: text field `job_desc`, file field `resume` with a
/// `.pdf`/`.docx` filename. Returns the hybrid match score and suggestions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut job_desc: Option<String> = None;
    let mut resume_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_desc") => {
                job_desc = Some(field.text().await?);
            }
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?.to_vec();
                resume_file = Some((filename, bytes));
            }
            _ => {} // unknown fields are ignored
        }
    }

    // An absent field and a blank one are the same failure to the caller.
    let job_desc = match job_desc {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => return Err(AppError::MissingJobDescription),
    };
    let (filename, bytes) = resume_file.ok_or(AppError::MissingResume)?;

    let format = FileFormat::from_filename(&filename).ok_or(AppError::UnsupportedFormat)?;
    info!(
        %filename,
        ?format,
        resume_bytes = bytes.len(),
        job_desc_chars = job_desc.len(),
        "Analyzing resume"
    );

    // Document parsing is CPU-bound; keep it off the async worker threads.
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&bytes, format))
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }

    let match_score = hybrid_similarity(&job_desc, &resume_text, state.scorer.as_ref()).await?;
    let suggestions = state.advisor.suggest(&job_desc, &resume_text);

    debug!(
        job_skills = ?state.skills.extract_skills(&job_desc),
        resume_skills = ?state.skills.extract_skills(&resume_text),
        "Recognized skill sets"
    );
    info!(
        match_score,
        suggestion_count = suggestions.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        match_score,
        suggestions,
    }))
}
