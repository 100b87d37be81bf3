//! Report entity model and search projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::tag::Tag;

/// A user-submitted fraud/phishing allegation against a URL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    pub id: i64,
    /// The submitting user.
    pub user_id: i64,
    /// The category this report belongs to.
    pub category_id: i64,
    /// Short title.
    pub title: String,
    /// Free-text description of the fraud.
    pub description: String,
    /// The reported URL.
    pub url: String,
    /// Current lifecycle status id.
    pub status_id: i32,
    /// Optional evidence image URL.
    pub image_url: Option<String>,
    /// Denormalized vote counter.
    pub vote_count: i32,
    /// Denormalized comment counter.
    pub comment_count: i32,
    /// When the report was submitted.
    pub created_at: DateTime<Utc>,
    /// When the report was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReport {
    /// The submitting user.
    pub user_id: i64,
    /// The category this report belongs to.
    pub category_id: i64,
    /// Short title.
    pub title: String,
    /// Free-text description of the fraud.
    pub description: String,
    /// The reported URL.
    pub url: String,
    /// Optional evidence image URL.
    pub image_url: Option<String>,
}

/// Data for a partial report update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReport {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New URL.
    pub url: Option<String>,
    /// New category.
    pub category_id: Option<i64>,
    /// New evidence image URL.
    pub image_url: Option<String>,
}

/// A report projection returned by the dynamic search.
///
/// The optional columns are populated only when the corresponding
/// `include` was requested; `tags` is `Some(vec![])` (never `None`) for a
/// tagless report when tag inclusion was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    /// The base report row.
    #[serde(flatten)]
    pub report: Report,
    /// Joined status name (include=status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    /// Joined status description (include=status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    /// Joined category name (include=category).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Joined submitter name (include=user).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Aggregated tags (include=tags).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ReportView {
    /// Wrap a bare report row with no joined columns.
    pub fn bare(report: Report) -> Self {
        Self {
            report,
            status_name: None,
            status_description: None,
            category_name: None,
            user_name: None,
            tags: None,
        }
    }
}

/// Outcome of a vote toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResult {
    /// The report's vote count after the toggle.
    pub vote_count: i32,
    /// Whether the user holds a vote after the toggle.
    pub has_voted: bool,
}
