//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An in-app notification delivered to a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: i64,
    /// The recipient.
    pub user_id: i64,
    /// Short headline.
    pub title: String,
    /// Notification body.
    pub message: String,
    /// Related entity id (e.g. the report that triggered this), if any.
    pub related_id: Option<i64>,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Last modification time (flips when marked read).
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient.
    pub user_id: i64,
    /// Short headline.
    pub title: String,
    /// Notification body.
    pub message: String,
    /// Related entity id, if any.
    pub related_id: Option<i64>,
}
