//! Report status moderation workflow.

use std::sync::Arc;

use tracing::{info, warn};

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_database::repositories::notification::NotificationRepository;
use reporthub_database::repositories::report::ReportRepository;
use reporthub_entity::notification::CreateNotification;
use reporthub_entity::report::{ReportInclude, ReportStatusHistory, ReportView};

use crate::context::RequestContext;

/// Fixed change reason recorded with every moderation entry.
const CHANGE_REASON: &str = "Status updated by moderator";

/// Moderator-only report status changes.
#[derive(Debug, Clone)]
pub struct ModerationService {
    /// Report repository.
    reports: Arc<ReportRepository>,
    /// Notification repository.
    notifications: Arc<NotificationRepository>,
}

impl ModerationService {
    /// Creates a new moderation service.
    pub fn new(
        reports: Arc<ReportRepository>,
        notifications: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            reports,
            notifications,
        }
    }

    /// Moves a report to a new status.
    ///
    /// The status change and its history entry are committed atomically;
    /// the owner notification is sent best-effort afterwards, so a failed
    /// notification never rolls back a completed moderation.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        report_id: i64,
        status_id: i32,
        note: Option<String>,
    ) -> AppResult<ReportView> {
        let report = self
            .reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Report {report_id} not found")))?;

        let target = self
            .reports
            .find_status(status_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Status {status_id} not found")))?;

        if report.status_id == status_id {
            return Err(AppError::validation(format!(
                "Report is already in status '{}'",
                target.name
            )));
        }

        let from_name = self
            .reports
            .find_status(report.status_id)
            .await?
            .map(|s| s.name)
            .unwrap_or_else(|| report.status_id.to_string());

        let note = note
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_note(&from_name, &target.name));

        let updated = self
            .reports
            .update_status(
                report_id,
                report.status_id,
                status_id,
                &note,
                CHANGE_REASON,
                ctx.user_id,
            )
            .await?;

        info!(
            report_id,
            from = report.status_id,
            to = status_id,
            moderator = ctx.user_id,
            "Report status updated"
        );

        let notification = CreateNotification {
            user_id: updated.user_id,
            title: "Report status updated".to_string(),
            message: format!("Your report '{}' is now {}", updated.title, target.name),
            related_id: Some(report_id),
        };
        if let Err(e) = self.notifications.create(&notification).await {
            warn!(report_id, error = %e, "Failed to notify report owner");
        }

        let include = ReportInclude {
            status: true,
            ..Default::default()
        };
        self.reports
            .find_view_by_id(report_id, include)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Report {report_id} not found")))
    }

    /// Lists a report's moderation history, newest change first.
    pub async fn status_history(&self, report_id: i64) -> AppResult<Vec<ReportStatusHistory>> {
        if self.reports.find_by_id(report_id).await?.is_none() {
            return Err(AppError::not_found(format!("Report {report_id} not found")));
        }
        self.reports.status_history(report_id).await
    }
}

/// The note recorded when the moderator left none.
fn default_note(from: &str, to: &str) -> String {
    format!("Status changed from {from} to {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_note_names_both_statuses() {
        assert_eq!(
            default_note("pending", "approved"),
            "Status changed from pending to approved"
        );
    }
}
