//! Application builder. Wires repositories, services and state into an
//! Axum app and runs it.

use std::sync::Arc;

use axum::Router;

use reporthub_auth::jwt::decoder::JwtDecoder;
use reporthub_auth::jwt::encoder::JwtEncoder;
use reporthub_core::config::AppConfig;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_database::DatabasePool;
use reporthub_database::repositories::{
    CategoryRepository, CommentRepository, NotificationRepository, ReportRepository,
    TagRepository, UserRepository,
};
use reporthub_service::category::CategoryService;
use reporthub_service::comment::CommentService;
use reporthub_service::notification::NotificationService;
use reporthub_service::report::{ModerationService, ReportService};
use reporthub_service::user::{AdminUserService, AuthService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a connected pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let pool = db.pool().clone();

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let report_repo = Arc::new(ReportRepository::new(pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let tag_repo = Arc::new(TagRepository::new(pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool));

    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let admin_user_service = Arc::new(AdminUserService::new(Arc::clone(&user_repo)));
    let report_service = Arc::new(ReportService::new(
        Arc::clone(&report_repo),
        Arc::clone(&tag_repo),
        Arc::clone(&category_repo),
    ));
    let moderation_service = Arc::new(ModerationService::new(
        Arc::clone(&report_repo),
        Arc::clone(&notification_repo),
    ));
    let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repo)));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&comment_repo),
        Arc::clone(&report_repo),
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));

    AppState {
        config: Arc::new(config),
        db,
        jwt_encoder,
        jwt_decoder,
        auth_service,
        user_service,
        admin_user_service,
        report_service,
        moderation_service,
        category_service,
        comment_service,
        notification_service,
    }
}

/// Builds the complete Axum application.
pub fn build_app(config: AppConfig, db: DatabasePool) -> Router {
    build_router(build_state(config, db))
}

/// Runs the ReportHub server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let upload_dir = config.upload.directory.clone();

    tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
        AppError::storage(format!(
            "Failed to create upload directory '{upload_dir}': {e}"
        ))
    })?;

    let app = build_app(config, db);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ReportHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("ReportHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
