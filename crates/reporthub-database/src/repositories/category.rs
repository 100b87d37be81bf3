//! Category repository implementation.

use sqlx::PgPool;

use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;
use reporthub_entity::category::{Category, CategoryUsage};

/// Repository for category CRUD and usage queries.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories by name.
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// Find the category a report is filed under.
    pub async fn find_for_report(&self, report_id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT c.* FROM categories c \
             JOIN reports r ON r.category_id = c.id \
             WHERE r.id = $1",
        )
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find report category", e)
        })
    }

    /// Create a new category.
    pub async fn create(&self, name: &str, description: Option<&str>) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_name_key") =>
            {
                AppError::conflict(format!("Category '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }

    /// Apply a partial update; absent fields keep their current value.
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = COALESCE($2, name), \
                                   description = COALESCE($3, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("categories_name_key") =>
            {
                AppError::conflict("Category name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update category", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Delete a category by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("reports_category_id_fkey") =>
                {
                    AppError::conflict("Category is still used by reports")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete category", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// The most-used categories with their report counts.
    pub async fn top_used(&self, limit: i64) -> AppResult<Vec<CategoryUsage>> {
        sqlx::query_as::<_, CategoryUsage>(
            "SELECT c.name, COUNT(r.id) AS usage_count \
             FROM categories c \
             LEFT JOIN reports r ON r.category_id = c.id \
             GROUP BY c.id \
             ORDER BY usage_count DESC, c.name \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list top categories", e)
        })
    }
}
