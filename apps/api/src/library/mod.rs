//! Keyword Library: accumulates required keywords across analyses, bucketed by role type.
//!
//! `AppState` holds an `Arc<dyn KeywordLibrary>`; the Postgres backend is the
//! production implementation, tests swap in an in-memory one.

pub mod handlers;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::analysis::keyword_matcher::KeywordScore;
use crate::analysis::types::RoleType;
use crate::errors::AppError;
use crate::models::keyword::KeywordRow;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait KeywordLibrary: Send + Sync {
    /// Most frequently required keywords for `role`, best first.
    async fn top_keywords(&self, role: RoleType, limit: i64) -> Result<Vec<KeywordRow>, AppError>;

    /// Counts one more occurrence of each keyword and keeps its latest weight.
    async fn record(&self, role: RoleType, keywords: &[KeywordScore]) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgKeywordLibrary
// ────────────────────────────────────────────────────────────────────────────

pub struct PgKeywordLibrary {
    pool: PgPool,
}

impl PgKeywordLibrary {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeywordLibrary for PgKeywordLibrary {
    async fn top_keywords(&self, role: RoleType, limit: i64) -> Result<Vec<KeywordRow>, AppError> {
        Ok(sqlx::query_as::<_, KeywordRow>(
            r#"
            SELECT keyword, role_type, frequency, importance, updated_at
            FROM keywords
            WHERE role_type = $1
            ORDER BY frequency DESC, importance DESC, keyword ASC
            LIMIT $2
            "#,
        )
        .bind(role.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn record(&self, role: RoleType, keywords: &[KeywordScore]) -> Result<(), AppError> {
        if keywords.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for keyword in keywords {
            sqlx::query(
                r#"
                INSERT INTO keywords (keyword, role_type, frequency, importance, updated_at)
                VALUES ($1, $2, 1, $3, NOW())
                ON CONFLICT (keyword, role_type) DO UPDATE
                SET frequency  = keywords.frequency + 1,
                    importance = EXCLUDED.importance,
                    updated_at = NOW()
                "#,
            )
            .bind(&keyword.keyword)
            .bind(role.as_str())
            .bind(keyword.weight)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(role = %role, count = keywords.len(), "keyword library updated");
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryKeywordLibrary: test double
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct InMemoryKeywordLibrary {
    rows: std::sync::Mutex<Vec<KeywordRow>>,
}

#[cfg(test)]
#[async_trait]
impl KeywordLibrary for InMemoryKeywordLibrary {
    async fn top_keywords(&self, role: RoleType, limit: i64) -> Result<Vec<KeywordRow>, AppError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("keyword library lock poisoned")))?;
        let mut bucket: Vec<KeywordRow> = rows
            .iter()
            .filter(|r| r.role_type == role.as_str())
            .cloned()
            .collect();
        bucket.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then(b.importance.total_cmp(&a.importance))
                .then(a.keyword.cmp(&b.keyword))
        });
        bucket.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(bucket)
    }

    async fn record(&self, role: RoleType, keywords: &[KeywordScore]) -> Result<(), AppError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("keyword library lock poisoned")))?;
        for keyword in keywords {
            let existing = rows
                .iter_mut()
                .find(|r| r.keyword == keyword.keyword && r.role_type == role.as_str());
            match existing {
                Some(row) => {
                    row.frequency += 1;
                    row.importance = keyword.weight;
                    row.updated_at = chrono::Utc::now();
                }
                None => rows.push(KeywordRow {
                    keyword: keyword.keyword.clone(),
                    role_type: role.as_str().to_string(),
                    frequency: 1,
                    importance: keyword.weight,
                    updated_at: chrono::Utc::now(),
                }),
            }
        }
        Ok(())
    }
}
