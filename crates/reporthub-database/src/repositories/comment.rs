//! Comment repository implementation.

use sqlx::PgPool;

use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::{PageRequest, PageResponse};
use reporthub_entity::comment::{Comment, CreateComment};

/// Repository for comments and the denormalized per-report counter.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// List a report's comments, newest first.
    pub async fn find_by_report(
        &self,
        report_id: i64,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE report_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(report_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(PageResponse::new(comments, page))
    }

    /// Insert a comment and bump the report's comment counter.
    ///
    /// Both writes share one transaction.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (report_id, user_id, title, content) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.report_id)
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))?;

        sqlx::query(
            "UPDATE reports SET comment_count = comment_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(data.report_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update comment count", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit comment", e)
        })?;

        Ok(comment)
    }

    /// Delete a comment and drop the report's counter, in one transaction.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let report_id = sqlx::query_scalar::<_, i64>(
            "DELETE FROM comments WHERE id = $1 RETURNING report_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete comment", e))?;

        let Some(report_id) = report_id else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE reports SET comment_count = GREATEST(comment_count - 1, 0), \
                                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(report_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update comment count", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit comment delete", e)
        })?;

        Ok(true)
    }
}
