use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::types::DocumentText;
use crate::models::resume::ResumeRow;

pub async fn insert_resume(
    pool: &PgPool,
    filename: &str,
    document: &DocumentText,
) -> Result<ResumeRow, sqlx::Error> {
    let word_count = i32::try_from(document.word_count()).unwrap_or(i32::MAX);

    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, filename, source_format, content, word_count)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, filename, source_format, content, word_count, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(filename)
    .bind(document.format().as_str())
    .bind(document.as_str())
    .bind(word_count)
    .fetch_one(pool)
    .await
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        SELECT id, filename, source_format, content, word_count, created_at
        FROM resumes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_resumes(pool: &PgPool, limit: i64) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        SELECT id, filename, source_format, content, word_count, created_at
        FROM resumes
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
