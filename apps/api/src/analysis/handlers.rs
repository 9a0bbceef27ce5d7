//! Axum route handler for the analysis endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::analysis::{run_analysis, AnalysisResult, Variant};
use crate::errors::AppError;
use crate::extract::extract;
use crate::state::AppState;
use crate::upload::{allowed_extension, SavedUpload};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub form_type: String,
    pub result: AnalysisResult,
}

/// POST /api/v1/analyze
///
/// One multipart endpoint for all three tools, discriminated by `form_type`
/// (`ats` | `resume` | `cover`). Carries a required `resume` file (PDF or
/// TXT) and, for the ats and cover variants, a required `job_description`
/// text field.
///
/// The uploaded file is written to scratch space under a unique name, read
/// once by the extractor, and removed before the response goes out — on every
/// path, including errors.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut form_type: Option<String> = None;
    let mut job_description: Option<String> = None;
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "form_type" => {
                form_type = Some(read_text_field(field).await?);
            }
            "job_description" => {
                job_description = Some(read_text_field(field).await?);
            }
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                resume = Some((filename, data));
            }
            _ => {}
        }
    }

    let form_type =
        form_type.ok_or_else(|| AppError::Validation("form_type is required".to_string()))?;
    let variant = Variant::from_form_type(&form_type)
        .ok_or_else(|| AppError::Validation(format!("Unknown form_type '{form_type}'")))?;

    let (filename, data) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    if !allowed_extension(&filename) {
        return Err(AppError::Validation("PDF or TXT only!".to_string()));
    }

    if variant.requires_job_description()
        && job_description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        return Err(AppError::Validation(
            "job_description is required for this tool".to_string(),
        ));
    }

    let saved = SavedUpload::write(&state.config.upload_dir, &filename, &data).await?;

    // PDF parsing is CPU-bound; keep it off the async worker.
    let path = saved.path().to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract(&path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?;

    let resume_text = match extracted {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => {
            return Err(AppError::Extraction("Error reading resume file.".to_string()));
        }
        Err(e) => {
            warn!("Resume extraction failed: {e:?}");
            return Err(AppError::Extraction("Error reading resume file.".to_string()));
        }
    };

    // The scratch file is only needed for extraction.
    drop(saved);

    let result = run_analysis(
        state.model.as_ref(),
        variant,
        job_description.as_deref(),
        &resume_text,
    )
    .await?;

    Ok(Json(AnalyzeResponse { form_type, result }))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}
