//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use reporthub_core::config::DatabaseConfig;
use reporthub_core::error::{AppError, ErrorKind};

/// Connections are recycled after this long regardless of idle state, so
/// the pool drains gracefully through Postgres restarts and failovers.
const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(1800);

/// Wrapper around the sqlx PostgreSQL connection pool.
///
/// Every repository clones the inner [`PgPool`], which is itself a cheap
/// handle; this type only owns pool construction and the health probe.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized from configuration.
    ///
    /// The moderation and voting paths hold a transaction across two or
    /// three statements, so `min_connections` keeps a warm floor instead
    /// of reconnecting under burst load.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .max_lifetime(MAX_CONNECTION_LIFETIME)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Probe connectivity with a round trip, for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_password_hides_only_the_password() {
        assert_eq!(
            mask_password("postgres://reporthub:s3cret@db:5432/reporthub"),
            "postgres://reporthub:****@db:5432/reporthub"
        );
    }

    #[test]
    fn mask_password_leaves_urls_without_credentials_alone() {
        assert_eq!(
            mask_password("postgres://localhost:5432/reporthub"),
            "postgres://localhost:5432/reporthub"
        );
    }
}
