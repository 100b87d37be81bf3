//! Request DTOs with validation.
//!
//! Bodies and query strings use camelCase field names on the wire.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reporthub_core::types::pagination::PageRequest;
use reporthub_entity::report::{
    ReportInclude, ReportSearchParams, ReportSort, resolve_status_ids,
};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Account registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Self-service profile update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMeRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 8))]
    pub password: Option<String>,
}

/// Admin user update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 8))]
    pub password: Option<String>,
    /// New admin flag.
    pub is_admin: Option<bool>,
    /// New super-admin flag.
    pub is_super_admin: Option<bool>,
}

/// Report creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    /// Category to file under.
    pub category_id: i64,
    /// Short title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Free-text description.
    #[validate(length(min = 1))]
    pub description: String,
    /// The reported URL.
    #[validate(url(message = "A valid URL is required"))]
    pub url: String,
    /// Optional evidence image URL.
    pub image_url: Option<String>,
    /// Tag names to attach.
    #[serde(default)]
    pub tag_names: Vec<String>,
}

/// Partial report update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportRequest {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New URL.
    #[validate(url)]
    pub url: Option<String>,
    /// New category.
    pub category_id: Option<i64>,
    /// New evidence image URL.
    pub image_url: Option<String>,
}

/// Moderation status change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// Target status id.
    pub status_id: i32,
    /// Optional moderation note.
    pub note: Option<String>,
}

/// Comment creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// The report being commented on.
    pub report_id: i64,
    /// Short title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Comment body.
    #[validate(length(min = 1))]
    pub content: String,
}

/// Category creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Category update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    /// New name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Tags-from-text request body (comma-separated names).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TagsFromTextRequest {
    /// Comma-separated tag names.
    #[validate(length(min = 1, message = "Tag text is required"))]
    pub text: String,
}

/// Raw query string of `GET /api/reports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSearchQuery {
    /// Short-circuit to a single report.
    pub id: Option<i64>,
    /// Status selector: a group name or a numeric id.
    pub status: Option<String>,
    /// Restrict to a submitting user.
    pub user_id: Option<i64>,
    /// Restrict to a category.
    pub category_id: Option<i64>,
    /// Restrict to an exact URL.
    pub url: Option<String>,
    /// Sort order: "popular" or "recent".
    pub sort: Option<String>,
    /// Comma-separated include tokens.
    pub include: Option<String>,
    /// Page number.
    pub page: Option<i64>,
    /// Items per page.
    pub limit: Option<i64>,
}

impl ReportSearchQuery {
    /// The joined projections this query asked for.
    pub fn include(&self) -> ReportInclude {
        let tokens: Vec<&str> = self
            .include
            .as_deref()
            .map(|s| s.split(',').collect())
            .unwrap_or_default();
        ReportInclude::from_tokens(&tokens)
    }

    /// Resolves the raw query into typed search parameters.
    pub fn into_params(self) -> ReportSearchParams {
        let include = self.include();
        ReportSearchParams {
            status_ids: resolve_status_ids(self.status.as_deref()),
            user_id: self.user_id,
            category_id: self.category_id,
            url: self.url,
            sort: ReportSort::parse(self.sort.as_deref()),
            include,
            page: PageRequest::from_raw(self.page, self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_resolves_into_typed_params() {
        let query = ReportSearchQuery {
            status: Some("active".to_string()),
            sort: Some("popular".to_string()),
            include: Some("status,tags".to_string()),
            page: Some(0),
            limit: Some(500),
            ..Default::default()
        };
        let params = query.into_params();

        assert_eq!(params.status_ids, Some(vec![1, 2]));
        assert_eq!(params.sort, ReportSort::Popular);
        assert!(params.include.status);
        assert!(params.include.tags);
        assert!(!params.include.user);
        assert_eq!(params.page.page, 1);
        assert_eq!(params.page.limit(), 100);
    }

    #[test]
    fn unknown_status_selector_drops_the_filter() {
        let query = ReportSearchQuery {
            status: Some("primary".to_string()),
            ..Default::default()
        };
        assert_eq!(query.into_params().status_ids, None);
    }
}
