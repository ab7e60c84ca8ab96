//! Axum route handlers for the extraction API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resume::process_document;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

/// POST /extract
///
/// Accepts a `multipart/form-data` upload with a `file` field and returns the
/// fields parsed from it. Unreadable documents still return `200` with an
/// all-default record; only a missing or malformed upload is an error.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let (filename, content) = read_file_field(&mut multipart).await?.ok_or_else(|| {
        AppError::UnprocessableEntity(format!("multipart field '{FILE_FIELD}' is required"))
    })?;

    info!("Received upload {filename:?} ({} bytes)", content.len());

    let extractor = state.extractor.clone();
    let record = tokio::task::spawn_blocking(move || {
        process_document(&extractor, &content, &filename)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(record))
}

/// Returns the filename and bytes of the first `file` field, skipping others.
/// A field without a filename is treated as having none (plain text fallback).
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        return Ok(Some((filename, content)));
    }
    Ok(None)
}
