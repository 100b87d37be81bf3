//! Per-user notification access.

use std::sync::Arc;

use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::{PageRequest, PageResponse};
use reporthub_database::repositories::notification::NotificationRepository;
use reporthub_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages a user's notifications.
///
/// Every read and write is scoped to the requesting user; a notification
/// belonging to someone else behaves as if it did not exist.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notifications: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Lists notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notifications.find_by_user(ctx.user_id, page).await
    }

    /// Lists the current user's unread notifications.
    pub async fn unread(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        self.notifications.find_unread(ctx.user_id).await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notifications.count_unread(ctx.user_id).await
    }

    /// Loads one of the current user's notifications.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> AppResult<Notification> {
        let notification = self
            .notifications
            .find_by_id(id)
            .await?
            .filter(|n| n.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;
        Ok(notification)
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: i64) -> AppResult<Notification> {
        // Ownership check first; the update itself is id-keyed.
        self.get(ctx, id).await?;
        self.notifications.mark_read(id).await
    }

    /// Marks all of the current user's notifications as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notifications.mark_all_read(ctx.user_id).await
    }
}
