//! Axum route handlers for resume analysis.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ExtractionError;
use crate::matching::analysis::{analyze, AnalysisResponse};
use crate::state::AppState;

/// Multipart field carrying the resume PDF.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the job description text.
pub const JD_TEXT_FIELD: &str = "jdText";

#[derive(Debug, Default)]
struct AnalyzeUpload {
    resume: Option<Bytes>,
    jd_text: String,
}

/// POST /analyze
///
/// Extracts text from the uploaded resume and scores it against `jdText`.
/// A missing `jdText` field is treated as an empty job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let pdf_bytes = upload
        .resume
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let upload_bytes = pdf_bytes.len();
    let extractor = Arc::clone(&state.extractor);
    let resume_text = tokio::task::spawn_blocking(move || extractor.extract(&pdf_bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

    let result = analyze(&resume_text, &upload.jd_text);

    info!(
        upload_bytes,
        resume_bytes = resume_text.len(),
        score = result.score,
        matched = result.matched.len(),
        missing = result.missing.len(),
        "Resume analysis completed"
    );

    Ok(Json(AnalysisResponse::from(result)))
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, AppError> {
    let mut upload = AnalyzeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Malformed upload", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            // A plain text part named `resume` is not an upload.
            RESUME_FIELD if field.file_name().is_some() => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| upload_error("Invalid resume file", e))?;
                upload.resume = Some(data);
            }
            JD_TEXT_FIELD => {
                upload.jd_text = field
                    .text()
                    .await
                    .map_err(|e| upload_error("Invalid jdText", e))?;
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    Ok(upload)
}

/// Body-limit violations keep their 413; everything else is a bad request.
fn upload_error(context: &str, error: MultipartError) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: {}", error.body_text()))
    } else {
        AppError::Validation(format!("{context}: {}", error.body_text()))
    }
}
