//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;

use reporthub_core::types::pagination::PageResponse;
use reporthub_entity::notification::Notification;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Unread count payload.
#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    /// Number of unread notifications.
    pub count: i64,
}

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let page = pagination.into_page_request();
    let notifications = state.notification_service.list(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread
pub async fn unread(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.unread(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread/count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UnreadCountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(UnreadCountResponse { count })))
}

/// GET /api/notifications/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state.notification_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let changed = state.notification_service.mark_all_read(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "{changed} notifications marked read"
    )))))
}
