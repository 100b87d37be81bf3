//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user comment on an approved report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// The report being commented on.
    pub report_id: i64,
    /// The commenting user.
    pub user_id: i64,
    /// Short title.
    pub title: String,
    /// Comment body.
    pub content: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The report being commented on.
    pub report_id: i64,
    /// The commenting user.
    pub user_id: i64,
    /// Short title.
    pub title: String,
    /// Comment body.
    pub content: String,
}
