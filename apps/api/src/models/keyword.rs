use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One keyword-library entry. `(keyword, role_type)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KeywordRow {
    pub keyword: String,
    pub role_type: String,
    pub frequency: i32,  // number of analyses that required it
    pub importance: f64, // latest TF-IDF weight
    pub updated_at: DateTime<Utc>,
}
