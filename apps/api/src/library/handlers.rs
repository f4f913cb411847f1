use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::types::RoleType;
use crate::errors::AppError;
use crate::models::keyword::KeywordRow;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

#[derive(Deserialize)]
pub struct KeywordQuery {
    pub role_type: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/keywords
pub async fn handle_list_keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordQuery>,
) -> Result<Json<Vec<KeywordRow>>, AppError> {
    let role = match params.role_type.as_deref() {
        Some(raw) => raw.parse::<RoleType>().map_err(AppError::Validation)?,
        None => RoleType::Other,
    };
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let rows = state.keyword_library.top_keywords(role, limit).await?;
    Ok(Json(rows))
}
