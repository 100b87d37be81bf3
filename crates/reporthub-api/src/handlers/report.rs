//! Report handlers: search, CRUD, tags, voting, moderation.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use reporthub_core::error::AppError;
use reporthub_core::types::pagination::PageResponse;
use reporthub_entity::category::Category;
use reporthub_entity::report::{
    Report, ReportStatusHistory, ReportView, StatusRow, UpdateReport, VoteResult,
};
use reporthub_entity::tag::Tag;
use reporthub_service::report::CreateReportInput;

use crate::dto::request::{
    CreateReportRequest, ReportSearchQuery, TagsFromTextRequest, UpdateReportRequest,
    UpdateStatusRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// GET /api/reports
///
/// An `id` query parameter short-circuits to a single-report lookup with
/// the same include handling as the list search.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<ReportSearchQuery>,
) -> Result<Json<ApiResponse<PageResponse<ReportView>>>, ApiError> {
    if let Some(id) = query.id {
        let include = query.include();
        let view = state.report_service.get(id, include).await?;
        let page = query.into_params().page;
        return Ok(Json(ApiResponse::ok(PageResponse::new(vec![view], &page))));
    }

    let params = query.into_params();
    let results = state.report_service.search(&params).await?;
    Ok(Json(ApiResponse::ok(results)))
}

/// GET /api/reports/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ReportSearchQuery>,
) -> Result<Json<ApiResponse<ReportView>>, ApiError> {
    let view = state.report_service.get(id, query.include()).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /api/reports
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReportRequest>,
) -> Result<Json<ApiResponse<ReportView>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let view = state
        .report_service
        .create(
            &auth,
            CreateReportInput {
                category_id: req.category_id,
                title: req.title,
                description: req.description,
                url: req.url,
                image_url: req.image_url,
                tag_names: req.tag_names,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// PUT /api/reports/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let data = UpdateReport {
        title: req.title,
        description: req.description,
        url: req.url,
        category_id: req.category_id,
        image_url: req.image_url,
    };
    let report = state.report_service.update(&auth, id, &data).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// DELETE /api/reports/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.report_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Report deleted"))))
}

/// GET /api/reports/statuses
pub async fn statuses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StatusRow>>>, ApiError> {
    let statuses = state.report_service.statuses().await?;
    Ok(Json(ApiResponse::ok(statuses)))
}

/// GET /api/reports/{id}/tags
pub async fn tags(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    let tags = state.report_service.tags(id).await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// GET /api/reports/{id}/category
pub async fn category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.report_service.category(id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/reports/{id}/tags/from-text
pub async fn retag_from_text(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<TagsFromTextRequest>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let tags = state
        .report_service
        .retag_from_text(&auth, id, &req.text)
        .await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// PUT /api/reports/{id}/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<VoteResult>>, ApiError> {
    let result = state.report_service.toggle_vote(&auth, id).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// PUT /api/reports/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<ReportView>>, ApiError> {
    let view = state
        .moderation_service
        .update_status(&admin, id, req.status_id, req.note)
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/reports/{id}/history
pub async fn status_history(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ReportStatusHistory>>>, ApiError> {
    let entries = state.moderation_service.status_history(id).await?;
    Ok(Json(ApiResponse::ok(entries)))
}
