//! Tag repository implementation.

use sqlx::PgPool;

use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;
use reporthub_entity::tag::Tag;

/// Repository for tags and the report/tag association.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The tags attached to a report, by name.
    pub async fn find_for_report(&self, report_id: i64) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.* FROM tags t \
             JOIN report_tags rt ON rt.tag_id = t.id \
             WHERE rt.report_id = $1 \
             ORDER BY t.name",
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list report tags", e))
    }

    /// Resolve a set of normalized names to tag rows, creating the missing
    /// ones. Insert and lookup share one transaction.
    pub async fn find_or_create(&self, names: &[String]) -> AppResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "INSERT INTO tags (name) SELECT unnest($1::text[]) ON CONFLICT (name) DO NOTHING",
        )
        .bind(names)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create tags", e))?;

        let tags = sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE name = ANY($1)")
            .bind(names)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load tags", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit tag creation", e)
        })?;

        Ok(tags)
    }

    /// Attach tags to a report; already attached pairs are left alone.
    pub async fn attach(&self, report_id: i64, tag_ids: &[i64]) -> AppResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO report_tags (report_id, tag_id) \
             SELECT $1, unnest($2::bigint[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(report_id)
        .bind(tag_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("report_tags_report_id_fkey") =>
            {
                AppError::not_found(format!("Report {report_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to attach tags", e),
        })?;

        Ok(())
    }

    /// Replace a report's tag set with the given tags, in one transaction.
    pub async fn replace_for_report(&self, report_id: i64, tag_ids: &[i64]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM report_tags WHERE report_id = $1")
            .bind(report_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to detach tags", e))?;

        if !tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO report_tags (report_id, tag_id) SELECT $1, unnest($2::bigint[])",
            )
            .bind(report_id)
            .bind(tag_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to attach tags", e))?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit tag replacement", e)
        })?;

        Ok(())
    }
}
