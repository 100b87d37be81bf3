//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use reporthub_core::error::AppError;
use reporthub_entity::category::{Category, CategoryUsage};

use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.category_service.list().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state
        .category_service
        .create(&admin, &req.name, req.description.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state
        .category_service
        .update(id, req.name.as_deref(), req.description.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.category_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Category deleted"))))
}

/// GET /api/categories/top/{limit}
pub async fn top(
    State(state): State<AppState>,
    Path(limit): Path<i64>,
) -> Result<Json<ApiResponse<Vec<CategoryUsage>>>, ApiError> {
    let top = state.category_service.top(limit).await?;
    Ok(Json(ApiResponse::ok(top)))
}
