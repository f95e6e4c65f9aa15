use std::path::Path as FsPath;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::analysis::normalize::{normalize_pages, word_count};
use crate::analysis::scorer::analyze;
use crate::errors::AppError;
use crate::models::resume::{
    AnalysisView, MessageResponse, NewResume, ResumeResponse, UploadResponse,
};
use crate::state::AppState;

/// POST /upload_resume
///
/// Validate → save to disk → extract → normalize → score → persist.
/// Nothing is persisted unless every step succeeds.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, data) = read_pdf_upload(&mut multipart).await?;
    info!(filename = %filename, bytes = data.len(), "Resume upload accepted");

    save_upload(&state.config.upload_dir, &filename, &data).await?;

    let pages = state.extractor.extract_pages(data).await?;
    let text = normalize_pages(&pages);
    let analysis = analyze(&text, &state.taxonomy);

    let record = state
        .store
        .create(NewResume {
            filename,
            total_words: word_count(&text),
            analysis,
        })
        .await?;

    Ok(Json(UploadResponse {
        message: "Resume analyzed and saved successfully".to_string(),
        resume_id: record.id,
        analysis: AnalysisView::from(&record.analysis),
    }))
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeResponse>>, AppError> {
    let records = state.store.get_all().await?;
    Ok(Json(records.iter().map(ResumeResponse::from).collect()))
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResumeResponse>, AppError> {
    let record = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(ResumeResponse::from(&record)))
}

/// DELETE /resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete_by_id(id).await? {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: format!("Deleted resume ID {id}"),
    }))
}

/// DELETE /clear_all
pub async fn handle_clear_all(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_all().await?;
    Ok(Json(MessageResponse {
        message: "All resume analyses cleared".to_string(),
    }))
}

/// Pulls the resume out of the form: the first part carrying a filename
/// (the `file` part for well-behaved clients). Plain text parts are skipped.
/// The extension is checked before the body is read.
async fn read_pdf_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if !filename.ends_with(".pdf") {
            warn!(filename = %filename, "Rejected non-PDF upload");
            return Err(AppError::InvalidFileType(
                "Please upload a PDF file".to_string(),
            ));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, data));
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}

/// Keeps the body-limit rejection distinct from malformed forms.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected upload over the body limit");
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Writes the upload under `upload_dir`, keeping only the final path component of the name.
async fn save_upload(upload_dir: &FsPath, filename: &str, data: &[u8]) -> Result<(), AppError> {
    let base = FsPath::new(filename)
        .file_name()
        .ok_or_else(|| AppError::Validation(format!("Invalid filename '{filename}'")))?;

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(base), data).await?;
    Ok(())
}
