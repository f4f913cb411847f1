use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::analysis::types::{DocumentText, SourceFormat};
use crate::errors::AppError;
use crate::ingest::{ingest_bytes, IngestLimits};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub filename: Option<String>,
    pub source_format: SourceFormat,
    pub text: String,
    pub word_count: usize,
    pub line_count: usize,
}

impl ScanResponse {
    fn new(filename: Option<String>, document: DocumentText) -> Self {
        Self {
            filename,
            source_format: document.format(),
            word_count: document.word_count(),
            line_count: document.line_count(),
            text: document.as_str().to_string(),
        }
    }
}

/// POST /api/v1/resumes/scan
/// Multipart upload with a single `file` field; returns the extracted text.
pub async fn handle_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let limits = IngestLimits::from_config(&state.config);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::PayloadTooLarge(format!("upload could not be read: {e}")))?;

        let name = filename.clone();
        let document = tokio::task::spawn_blocking(move || {
            ingest_bytes(name.as_deref(), content_type.as_deref(), &bytes, limits)
        })
        .await
        .map_err(|e| AppError::Ingest(format!("document decoder failed: {e}")))??;

        return Ok(Json(ScanResponse::new(filename, document)));
    }

    Err(AppError::Validation("multipart field 'file' is required".into()))
}
