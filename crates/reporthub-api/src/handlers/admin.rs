//! Admin-only user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use reporthub_core::error::AppError;
use reporthub_core::types::pagination::PageResponse;
use reporthub_entity::user::UpdateUser;
use reporthub_service::user::admin::UserStatsOverview;

use crate::dto::request::{AdminUpdateUserRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// POST /api/admin/register
pub async fn register_admin(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_user_service
        .register_admin(&admin, &req.email, &req.name, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/admin/register-super
pub async fn register_super_admin(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_user_service
        .register_super_admin(&admin, &req.email, &req.name, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/admin/init-super
///
/// Unauthenticated bootstrap route; the service rejects it once any
/// super admin exists.
pub async fn init_super_admin(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_user_service
        .init_super_admin(&req.email, &req.name, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/admin/user/list
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let page = pagination.into_page_request();
    let users = state.admin_user_service.list_users(&page).await?;

    let items = users.items.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok(PageResponse {
        items,
        page: users.page,
        page_size: users.page_size,
    })))
}

/// GET /api/admin/user/stats
pub async fn user_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<UserStatsOverview>>, ApiError> {
    let overview = state.admin_user_service.user_stats().await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/admin/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin_user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
    Json(req): Json<AdminUpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = UpdateUser {
        name: req.name,
        email: req.email,
        password_hash: None,
        is_admin: req.is_admin,
        is_super_admin: req.is_super_admin,
    };
    let user = state
        .admin_user_service
        .update_user(&admin, id, data, req.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete_user(&admin, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("User deleted"))))
}
