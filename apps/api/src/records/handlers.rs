use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::types::{DocumentText, RoleType, SourceFormat};
use crate::errors::AppError;
use crate::ingest::{preprocess::clean_text, IngestLimits};
use crate::models::history::AnalysisHistoryRow;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;
use crate::records::history::list_history;
use crate::records::jobs::{get_job, insert_job, list_jobs, NewJob};
use crate::records::list_limit;
use crate::records::resumes::{get_resume, insert_resume, list_resumes};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: Option<String>,
    pub description: String,
    pub role_type: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub filename: String,
    pub content: String,
    pub source_format: Option<String>,
}

fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let title = require_text("title", &req.title)?;
    let description = require_text("description", &req.description)?;
    IngestLimits::from_config(&state.config).check_text("job description", description)?;
    let role_type = match req.role_type.as_deref() {
        Some(raw) => raw.parse::<RoleType>().map_err(AppError::Validation)?,
        None => RoleType::Other,
    };

    let job = insert_job(
        &state.db,
        NewJob {
            title,
            company: req.company.as_deref().map(str::trim).filter(|c| !c.is_empty()),
            description,
            role_type,
        },
    )
    .await?;
    tracing::info!(job_id = %job.id, "job saved");
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs(&state.db, list_limit(params.limit)).await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = get_job(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let filename = require_text("filename", &req.filename)?;
    let content = clean_text(&req.content);
    require_text("content", &content)?;
    IngestLimits::from_config(&state.config).check_text("resume", &content)?;
    let document = match req.source_format.as_deref() {
        Some(raw) => {
            let format = raw.parse::<SourceFormat>().map_err(AppError::Validation)?;
            DocumentText::new(content, format)
        }
        None => DocumentText::plain(content),
    };

    let resume = insert_resume(&state.db, filename, &document).await?;
    tracing::info!(resume_id = %resume.id, "resume saved");
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(list_resumes(&state.db, list_limit(params.limit)).await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = get_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<AnalysisHistoryRow>>, AppError> {
    Ok(Json(list_history(&state.db, list_limit(params.limit)).await?))
}
