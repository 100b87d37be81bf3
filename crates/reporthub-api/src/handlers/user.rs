//! User self-service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use reporthub_core::error::AppError;

use crate::dto::request::{RegisterRequest, UpdateMeRequest};
use crate::dto::response::{ApiResponse, UserResponse, UserStatsResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.email, &req.name, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/users/me/stats
pub async fn my_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserStatsResponse>>, ApiError> {
    let stats = state.user_service.get_my_stats(&auth).await?;
    Ok(Json(ApiResponse::ok(stats.into())))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateMeRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .update_me(&auth, req.name, req.email, req.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
