//! Comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use reporthub_core::error::AppError;
use reporthub_core::types::pagination::PageResponse;
use reporthub_entity::comment::Comment;

use crate::dto::request::CreateCommentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/comments/report/{id}
pub async fn list_by_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Comment>>>, ApiError> {
    let page = pagination.into_page_request();
    let comments = state.comment_service.list_by_report(report_id, &page).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// GET /api/comments/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let comment = state.comment_service.get(id).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state
        .comment_service
        .create(&auth, req.report_id, req.title, req.content)
        .await?;
    Ok(Json(ApiResponse::ok(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.comment_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Comment deleted"))))
}
