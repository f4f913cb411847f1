use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::ats_checker::{check_ats, AtsReport};
use crate::analysis::grammar_checker::{check_grammar, GrammarReport};
use crate::analysis::keyword_matcher::{match_keywords, MatchResult};
use crate::analysis::pipeline::{analyze, AnalysisResult};
use crate::analysis::resume_parser::{parse_resume, StructuredResume};
use crate::analysis::rewriter::{auto_fix, AutoFixResult, FixKind};
use crate::analysis::types::RoleType;
use crate::errors::AppError;
use crate::ingest::IngestLimits;
use crate::records::history::{insert_history, NewHistory};
use crate::records::jobs::get_job;
use crate::records::resumes::get_resume;
use crate::state::AppState;

/// Library keywords fetched per analysis to boost matching job terms.
const LIBRARY_LOOKUP_LIMIT: i64 = 100;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub resume_id: Option<Uuid>,
    pub job_description: Option<String>,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
    pub role_type: Option<String>,
    #[serde(default)]
    pub save_history: bool,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub role_type: RoleType,
    pub history_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

fn all_fixes() -> Vec<FixKind> {
    vec![FixKind::MissingKeywords, FixKind::ActionVerbs]
}

#[derive(Deserialize)]
pub struct AutoFixRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default = "all_fixes")]
    pub fixes: Vec<FixKind>,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let limits = IngestLimits::from_config(&state.config);

    let resume_text = match (req.resume_text, req.resume_id) {
        (Some(text), _) => text,
        (None, Some(id)) => {
            get_resume(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?
                .content
        }
        (None, None) => {
            return Err(AppError::Validation(
                "resume_text or resume_id is required".into(),
            ))
        }
    };

    let mut job_title = req.job_title;
    let mut role_type = match req.role_type.as_deref() {
        Some(raw) => Some(raw.parse::<RoleType>().map_err(AppError::Validation)?),
        None => None,
    };
    let job_text = match (req.job_description, req.job_id) {
        (Some(text), _) => text,
        (None, Some(id)) => {
            let job = get_job(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
            if job_title.is_none() {
                job_title = Some(job.title);
            }
            if role_type.is_none() {
                role_type = job.role_type.parse().ok();
            }
            job.description
        }
        (None, None) => {
            return Err(AppError::Validation(
                "job_description or job_id is required".into(),
            ))
        }
    };
    let role_type = role_type.unwrap_or_default();

    limits.check_text("resume", &resume_text)?;
    limits.check_text("job description", &job_text)?;

    // Library failures degrade to unboosted matching.
    let library: Vec<String> = if state.analysis.library_boost_enabled() {
        match state
            .keyword_library
            .top_keywords(role_type, LIBRARY_LOOKUP_LIMIT)
            .await
        {
            Ok(rows) => rows.into_iter().map(|r| r.keyword).collect(),
            Err(e) => {
                warn!(error = %e, role = %role_type, "keyword library lookup failed");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let result = analyze(&resume_text, &job_text, &library, &state.analysis)?;

    if let Err(e) = state
        .keyword_library
        .record(role_type, &result.keyword_match.keywords)
        .await
    {
        warn!(error = %e, role = %role_type, "keyword library update failed");
    }

    let history_id = if req.save_history {
        let id = insert_history(
            &state.db,
            NewHistory {
                job_id: req.job_id,
                resume_id: req.resume_id,
                job_title: job_title.as_deref(),
                role_type,
                result: &result,
            },
        )
        .await?;
        info!(history_id = %id, "analysis saved");
        Some(id)
    } else {
        None
    };

    Ok(Json(AnalyzeResponse {
        result,
        role_type,
        history_id,
    }))
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let limits = IngestLimits::from_config(&state.config);
    limits.check_text("resume", &req.resume_text)?;
    limits.check_text("job description", &req.job_description)?;
    Ok(Json(match_keywords(
        &req.resume_text,
        &req.job_description,
        &state.analysis,
    )))
}

/// POST /api/v1/ats-check
pub async fn handle_ats_check(
    State(state): State<AppState>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<AtsReport>, AppError> {
    IngestLimits::from_config(&state.config).check_text("resume", &req.resume_text)?;
    Ok(Json(check_ats(&req.resume_text, &state.analysis)))
}

/// POST /api/v1/grammar-check
pub async fn handle_grammar_check(
    State(state): State<AppState>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<GrammarReport>, AppError> {
    IngestLimits::from_config(&state.config).check_text("resume", &req.resume_text)?;
    Ok(Json(check_grammar(&req.resume_text, &state.analysis)))
}

/// POST /api/v1/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<StructuredResume>, AppError> {
    IngestLimits::from_config(&state.config).check_text("resume", &req.resume_text)?;
    Ok(Json(parse_resume(&req.resume_text, &state.analysis)))
}

/// POST /api/v1/resumes/auto-fix
pub async fn handle_auto_fix(
    State(state): State<AppState>,
    Json(req): Json<AutoFixRequest>,
) -> Result<Json<AutoFixResult>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text is required".into()));
    }
    let limits = IngestLimits::from_config(&state.config);
    limits.check_text("resume", &req.resume_text)?;
    limits.check_text("job description", &req.job_description)?;
    Ok(Json(auto_fix(
        &req.resume_text,
        &req.job_description,
        &req.fixes,
        &state.analysis,
    )))
}
