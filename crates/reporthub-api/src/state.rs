//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use reporthub_auth::jwt::decoder::JwtDecoder;
use reporthub_auth::jwt::encoder::JwtEncoder;
use reporthub_core::config::AppConfig;
use reporthub_database::DatabasePool;

use reporthub_service::category::CategoryService;
use reporthub_service::comment::CommentService;
use reporthub_service::notification::NotificationService;
use reporthub_service::report::{ModerationService, ReportService};
use reporthub_service::user::{AdminUserService, AuthService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool (used by the health check).
    pub db: DatabasePool,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Login and token refresh.
    pub auth_service: Arc<AuthService>,
    /// Self-service account operations.
    pub user_service: Arc<UserService>,
    /// Admin-only user management.
    pub admin_user_service: Arc<AdminUserService>,
    /// Report CRUD, search, tagging and voting.
    pub report_service: Arc<ReportService>,
    /// Moderator status changes.
    pub moderation_service: Arc<ModerationService>,
    /// Category management.
    pub category_service: Arc<CategoryService>,
    /// Comments on approved reports.
    pub comment_service: Arc<CommentService>,
    /// Per-user notifications.
    pub notification_service: Arc<NotificationService>,
}
