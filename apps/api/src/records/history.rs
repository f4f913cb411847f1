use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::pipeline::AnalysisResult;
use crate::analysis::types::RoleType;
use crate::models::history::AnalysisHistoryRow;

/// Parameters for saving one analysis run.
pub struct NewHistory<'a> {
    pub job_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    pub job_title: Option<&'a str>,
    pub role_type: RoleType,
    pub result: &'a AnalysisResult,
}

pub async fn insert_history(pool: &PgPool, entry: NewHistory<'_>) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    let result = serde_json::to_value(entry.result)?;

    sqlx::query(
        r#"
        INSERT INTO analysis_history
            (id, job_id, resume_id, job_title, role_type,
             ats_score, match_score, overall_score, result)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(entry.job_id)
    .bind(entry.resume_id)
    .bind(entry.job_title)
    .bind(entry.role_type.as_str())
    .bind(entry.result.ats_score as i32)
    .bind(entry.result.match_score as i32)
    .bind(entry.result.overall_score as i32)
    .bind(result)
    .execute(pool)
    .await?;

    Ok(id)
}

pub async fn list_history(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<AnalysisHistoryRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisHistoryRow>(
        r#"
        SELECT id, job_id, resume_id, job_title, role_type,
               ats_score, match_score, overall_score, result, created_at
        FROM analysis_history
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
