use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::SubmissionRecord;

use super::{StoreError, SubmissionStore};

pub async fn put(pool: &PgPool, record: &SubmissionRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO "ContactForm" (id, item) VALUES ($1, $2)
           ON CONFLICT (id) DO UPDATE SET item = EXCLUDED.item"#,
    )
    .bind(&record.id)
    .bind(Json(record))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SubmissionRecord>, sqlx::Error> {
    let item = sqlx::query_scalar::<_, Json<SubmissionRecord>>(
        r#"SELECT item FROM "ContactForm" WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item.map(|Json(record)| record))
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "ContactForm""#)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Document store backed by the `"ContactForm"` table.
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        put(&self.pool, record).await?;
        Ok(())
    }
}
