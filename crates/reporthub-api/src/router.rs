//! Route definitions for the ReportHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Uploaded images are served statically under the configured public
//! prefix. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.upload.max_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(admin_routes())
        .merge(report_routes())
        .merge(category_routes())
        .merge(comment_routes())
        .merge(notification_routes())
        .merge(file_routes())
        .merge(health_routes());

    let static_uploads = ServeDir::new(&state.config.upload.directory);
    let public_prefix = state.config.upload.public_prefix.clone();

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&public_prefix, static_uploads)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, token refresh, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/profile", get(handlers::auth::profile))
}

/// Registration and self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users/me", get(handlers::user::me))
        .route("/users/me", put(handlers::user::update_me))
        .route("/users/me/stats", get(handlers::user::my_stats))
}

/// Admin-only user management, plus the one-time super admin bootstrap
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/register", post(handlers::admin::register_admin))
        .route(
            "/admin/register-super",
            post(handlers::admin::register_super_admin),
        )
        .route("/admin/init-super", post(handlers::admin::init_super_admin))
        .route("/admin/user/list", get(handlers::admin::list_users))
        .route("/admin/user/stats", get(handlers::admin::user_stats))
        .route("/admin/user/{id}", get(handlers::admin::get_user))
        .route("/admin/user/{id}", put(handlers::admin::update_user))
        .route("/admin/user/{id}", delete(handlers::admin::delete_user))
}

/// Report search, CRUD, tags, voting, moderation
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(handlers::report::search))
        .route("/reports", post(handlers::report::create))
        // Must stay above "/reports/{id}" so "statuses" is not parsed as an id.
        .route("/reports/statuses", get(handlers::report::statuses))
        .route("/reports/{id}", get(handlers::report::get))
        .route("/reports/{id}", put(handlers::report::update))
        .route("/reports/{id}", delete(handlers::report::delete))
        .route("/reports/{id}/tags", get(handlers::report::tags))
        .route("/reports/{id}/category", get(handlers::report::category))
        .route(
            "/reports/{id}/tags/from-text",
            put(handlers::report::retag_from_text),
        )
        .route("/reports/{id}/vote", put(handlers::report::vote))
        .route("/reports/{id}/status", put(handlers::report::update_status))
        .route(
            "/reports/{id}/history",
            get(handlers::report::status_history),
        )
}

/// Category CRUD and usage ranking
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/categories", post(handlers::category::create))
        .route("/categories/top/{limit}", get(handlers::category::top))
        .route("/categories/{id}", get(handlers::category::get))
        .route("/categories/{id}", put(handlers::category::update))
        .route("/categories/{id}", delete(handlers::category::delete))
}

/// Comment endpoints
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(handlers::comment::create))
        .route(
            "/comments/report/{id}",
            get(handlers::comment::list_by_report),
        )
        .route("/comments/{id}", get(handlers::comment::get))
        .route("/comments/{id}", delete(handlers::comment::delete))
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route("/notifications/unread", get(handlers::notification::unread))
        .route(
            "/notifications/unread/count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route("/notifications/{id}", get(handlers::notification::get))
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Image upload
fn file_routes() -> Router<AppState> {
    Router::new().route("/files/upload", post(handlers::file::upload))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
