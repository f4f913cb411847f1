use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub source_format: String, // "plain" | "pdf" | "docx"
    pub content: String,
    pub word_count: i32,
    pub created_at: DateTime<Utc>,
}
