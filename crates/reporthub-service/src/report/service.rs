//! Report CRUD, search, tagging and voting.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::PageResponse;
use reporthub_database::repositories::category::CategoryRepository;
use reporthub_database::repositories::report::ReportRepository;
use reporthub_database::repositories::tag::TagRepository;
use reporthub_entity::category::Category;
use reporthub_entity::report::{
    CreateReport, Report, ReportInclude, ReportSearchParams, ReportView, StatusRow, UpdateReport,
    VoteResult,
};
use reporthub_entity::tag::{Tag, normalize_tag_names};

use crate::context::RequestContext;

/// Input for creating a report, including the optional initial tag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportInput {
    /// The category to file under.
    pub category_id: i64,
    /// Short title.
    pub title: String,
    /// Free-text description of the fraud.
    pub description: String,
    /// The reported URL.
    pub url: String,
    /// Optional evidence image URL.
    pub image_url: Option<String>,
    /// Tag names to find-or-create and attach.
    pub tag_names: Vec<String>,
}

/// Report use cases available to regular users.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Report repository.
    reports: Arc<ReportRepository>,
    /// Tag repository.
    tags: Arc<TagRepository>,
    /// Category repository.
    categories: Arc<CategoryRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        reports: Arc<ReportRepository>,
        tags: Arc<TagRepository>,
        categories: Arc<CategoryRepository>,
    ) -> Self {
        Self {
            reports,
            tags,
            categories,
        }
    }

    /// Runs the dynamic report search.
    pub async fn search(&self, params: &ReportSearchParams) -> AppResult<PageResponse<ReportView>> {
        self.reports.search(params).await
    }

    /// Loads one report with the requested joined projections.
    pub async fn get(&self, id: i64, include: ReportInclude) -> AppResult<ReportView> {
        self.reports
            .find_view_by_id(id, include)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Report {id} not found")))
    }

    /// Submits a new report. It starts in the pending status; tag names
    /// are normalized, created as needed and attached.
    pub async fn create(&self, ctx: &RequestContext, input: CreateReportInput) -> AppResult<ReportView> {
        let report = self
            .reports
            .create(&CreateReport {
                user_id: ctx.user_id,
                category_id: input.category_id,
                title: input.title,
                description: input.description,
                url: input.url,
                image_url: input.image_url,
            })
            .await?;

        let names = normalize_tag_names(&input.tag_names);
        let mut view = ReportView::bare(report);
        if !names.is_empty() {
            let tags = self.tags.find_or_create(&names).await?;
            let tag_ids: Vec<i64> = tags.iter().map(|t| t.id).collect();
            self.tags.attach(view.report.id, &tag_ids).await?;
            view.tags = Some(tags);
        }

        info!(report_id = view.report.id, user_id = ctx.user_id, "Report created");
        Ok(view)
    }

    /// Applies a partial update. Only the owner or a moderator may edit.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: &UpdateReport,
    ) -> AppResult<Report> {
        self.ensure_editable(ctx, id).await?;
        self.reports.update(id, data).await
    }

    /// Deletes a report. Only the owner or a moderator may delete.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        self.ensure_editable(ctx, id).await?;
        if !self.reports.delete(id).await? {
            return Err(AppError::not_found(format!("Report {id} not found")));
        }
        info!(report_id = id, user_id = ctx.user_id, "Report deleted");
        Ok(())
    }

    /// The tags attached to a report.
    pub async fn tags(&self, report_id: i64) -> AppResult<Vec<Tag>> {
        self.require_report(report_id).await?;
        self.tags.find_for_report(report_id).await
    }

    /// The category a report is filed under.
    pub async fn category(&self, report_id: i64) -> AppResult<Category> {
        self.categories
            .find_for_report(report_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Report {report_id} not found")))
    }

    /// Replaces a report's tag set from a comma-separated text.
    pub async fn retag_from_text(
        &self,
        ctx: &RequestContext,
        report_id: i64,
        text: &str,
    ) -> AppResult<Vec<Tag>> {
        self.ensure_editable(ctx, report_id).await?;

        let raw: Vec<&str> = text.split(',').collect();
        let names = normalize_tag_names(&raw);
        let tags = self.tags.find_or_create(&names).await?;
        let tag_ids: Vec<i64> = tags.iter().map(|t| t.id).collect();
        self.tags.replace_for_report(report_id, &tag_ids).await?;

        Ok(tags)
    }

    /// Lists the report lifecycle statuses.
    pub async fn statuses(&self) -> AppResult<Vec<StatusRow>> {
        self.reports.find_statuses().await
    }

    /// Toggles the current user's vote on a report.
    pub async fn toggle_vote(&self, ctx: &RequestContext, report_id: i64) -> AppResult<VoteResult> {
        let result = self.reports.toggle_vote(report_id, ctx.user_id).await?;
        info!(
            report_id,
            user_id = ctx.user_id,
            has_voted = result.has_voted,
            "Vote toggled"
        );
        Ok(result)
    }

    async fn require_report(&self, id: i64) -> AppResult<Report> {
        self.reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Report {id} not found")))
    }

    async fn ensure_editable(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let report = self.require_report(id).await?;
        if !ctx.can_act_on(report.user_id) {
            return Err(AppError::forbidden("Not allowed to modify this report"));
        }
        Ok(())
    }
}
