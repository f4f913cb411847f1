use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisHistoryRow {
    pub id: Uuid,
    pub job_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    pub job_title: Option<String>,
    pub role_type: String,
    pub ats_score: i32,
    pub match_score: i32,
    pub overall_score: i32,
    /// Serialized `AnalysisResult`, stored verbatim.
    pub result: Value,
    pub created_at: DateTime<Utc>,
}
