//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use reporthub_core::error::{AppError, ErrorKind};

/// Apply any pending schema migrations at startup.
///
/// The status seed rows live in the initial migration, so a fresh database
/// is fully usable once this returns.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(known = migrator.migrations.len(), "Applying database migrations");

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
