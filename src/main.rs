//! ReportHub Server
//!
//! Main entry point: loads configuration, connects to the database, runs
//! migrations and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use reporthub_core::config::AppConfig;
use reporthub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from TOML files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("REPORTHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ReportHub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = reporthub_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    reporthub_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    reporthub_api::run_server(config, db).await
}
