//! User repository implementation.

use sqlx::PgPool;

use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::{PageRequest, PageResponse};
use reporthub_entity::user::{CreateUser, UpdateUser, User, UserStats};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users with pagination, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(users, page))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password_hash, is_admin, is_super_admin) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .bind(data.is_super_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Apply a partial update; absent fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              password_hash = COALESCE($4, password_hash), \
                              is_admin = COALESCE($5, is_admin), \
                              is_super_admin = COALESCE($6, is_super_admin), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .bind(data.is_super_admin)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email is already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Delete a user by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether any super admin account exists.
    pub async fn super_admin_exists(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE is_super_admin = TRUE)",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for super admin", e)
        })
    }

    /// Aggregate activity counts for one user.
    pub async fn stats_for_user(&self, id: i64) -> AppResult<Option<UserStats>> {
        sqlx::query_as::<_, UserStats>(&stats_query("WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user stats", e))
    }

    /// Aggregate activity counts for every user, newest first.
    pub async fn stats_for_all(&self) -> AppResult<Vec<UserStats>> {
        sqlx::query_as::<_, UserStats>(&stats_query(""))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load user stats list", e)
            })
    }
}

/// Per-user activity counts via correlated subqueries. Left-join
/// aggregates would multiply rows across the three tables.
fn stats_query(filter: &str) -> String {
    format!(
        "SELECT u.id, u.name, u.email, u.is_admin, u.is_super_admin, u.created_at, \
                (SELECT COUNT(*) FROM reports r WHERE r.user_id = u.id) AS report_count, \
                (SELECT COUNT(*) FROM comments c WHERE c.user_id = u.id) AS comment_count, \
                (SELECT COUNT(*) FROM report_votes v WHERE v.user_id = u.id) AS vote_count \
         FROM users u {filter} ORDER BY u.created_at DESC"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_query_embeds_filter() {
        let sql = stats_query("WHERE u.id = $1");
        assert!(sql.contains("FROM users u WHERE u.id = $1 ORDER BY"));
        assert!(sql.contains("report_count"));
    }
}
