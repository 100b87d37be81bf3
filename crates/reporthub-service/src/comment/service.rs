//! Comments on approved reports.

use std::sync::Arc;

use tracing::info;

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::{PageRequest, PageResponse};
use reporthub_database::repositories::comment::CommentRepository;
use reporthub_database::repositories::report::ReportRepository;
use reporthub_entity::comment::{Comment, CreateComment};
use reporthub_entity::report::{Report, ReportStatus};

use crate::context::RequestContext;

/// Comment use cases, including the approved-only guard.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comments: Arc<CommentRepository>,
    /// Report repository.
    reports: Arc<ReportRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comments: Arc<CommentRepository>, reports: Arc<ReportRepository>) -> Self {
        Self { comments, reports }
    }

    /// Lists a report's comments.
    pub async fn list_by_report(
        &self,
        report_id: i64,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Comment>> {
        self.comments.find_by_report(report_id, page).await
    }

    /// Loads one comment by id.
    pub async fn get(&self, id: i64) -> AppResult<Comment> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))
    }

    /// Writes a comment on a report.
    ///
    /// The parent is checked before any write: it must exist and be in
    /// the approved status, otherwise nothing is inserted.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        report_id: i64,
        title: String,
        content: String,
    ) -> AppResult<Comment> {
        let report = self.reports.find_by_id(report_id).await?;
        ensure_commentable(report.as_ref(), report_id)?;

        let comment = self
            .comments
            .create(&CreateComment {
                report_id,
                user_id: ctx.user_id,
                title,
                content,
            })
            .await?;

        info!(comment_id = comment.id, report_id, user_id = ctx.user_id, "Comment created");
        Ok(comment)
    }

    /// Deletes a comment. Only its author or a moderator may delete.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let comment = self.get(id).await?;
        if !ctx.can_act_on(comment.user_id) {
            return Err(AppError::forbidden("Not allowed to delete this comment"));
        }

        if !self.comments.delete(id).await? {
            return Err(AppError::not_found(format!("Comment {id} not found")));
        }
        Ok(())
    }
}

/// A report accepts comments only once it has been approved.
fn ensure_commentable(report: Option<&Report>, report_id: i64) -> AppResult<()> {
    let Some(report) = report else {
        return Err(AppError::not_found(format!("Report {report_id} not found")));
    };
    if report.status_id != ReportStatus::Approved.id() {
        return Err(AppError::validation(
            "Comments are only allowed on approved reports",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reporthub_core::error::ErrorKind;

    fn report_with_status(status_id: i32) -> Report {
        Report {
            id: 1,
            user_id: 1,
            category_id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            url: "https://example.com".to_string(),
            status_id,
            image_url: None,
            vote_count: 0,
            comment_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn missing_report_is_not_found() {
        let err = ensure_commentable(None, 9).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn only_approved_reports_accept_comments() {
        for status_id in [1, 2, 4] {
            let report = report_with_status(status_id);
            let err = ensure_commentable(Some(&report), 1).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
        let report = report_with_status(3);
        assert!(ensure_commentable(Some(&report), 1).is_ok());
    }
}
