use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::types::RoleType;
use crate::models::job::JobRow;

pub struct NewJob<'a> {
    pub title: &'a str,
    pub company: Option<&'a str>,
    pub description: &'a str,
    pub role_type: RoleType,
}

pub async fn insert_job(pool: &PgPool, job: NewJob<'_>) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (id, title, company, description, role_type)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, company, description, role_type, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job.title)
    .bind(job.company)
    .bind(job.description)
    .bind(job.role_type.as_str())
    .fetch_one(pool)
    .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT id, title, company, description, role_type, created_at FROM jobs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_jobs(pool: &PgPool, limit: i64) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        SELECT id, title, company, description, role_type, created_at
        FROM jobs
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
