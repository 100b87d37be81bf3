//! Typed parameters for the dynamic report search.

use serde::{Deserialize, Serialize};

use reporthub_core::types::PageRequest;

use super::status::ReportStatus;

/// Sort order for report listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSort {
    /// Most-voted first, ties broken by recency.
    Popular,
    /// Newest first.
    #[default]
    Recent,
}

impl ReportSort {
    /// Parse a raw query value; anything unrecognized falls back to recent.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("popular") => Self::Popular,
            _ => Self::Recent,
        }
    }
}

/// Which joined projections the caller asked for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReportInclude {
    /// Join status name/description.
    pub status: bool,
    /// Join category name.
    pub category: bool,
    /// Join submitter name.
    pub user: bool,
    /// Aggregate tags per report.
    pub tags: bool,
}

impl ReportInclude {
    /// Build from a list of include tokens; unknown tokens are ignored.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut include = Self::default();
        for token in tokens {
            match token.as_ref().trim() {
                "status" => include.status = true,
                "category" => include.category = true,
                "user" => include.user = true,
                "tags" => include.tags = true,
                _ => {}
            }
        }
        include
    }
}

/// Fully resolved parameters for a report search.
///
/// Every field is an explicit, typed constraint; absent fields impose no
/// constraint. The repository turns this into SQL with bound parameters
/// only; filter values never enter the query text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSearchParams {
    /// Restrict to these status ids.
    pub status_ids: Option<Vec<i32>>,
    /// Restrict to reports submitted by this user.
    pub user_id: Option<i64>,
    /// Restrict to this category.
    pub category_id: Option<i64>,
    /// Restrict to this exact URL.
    pub url: Option<String>,
    /// Sort order.
    pub sort: ReportSort,
    /// Requested joined projections.
    pub include: ReportInclude,
    /// Pagination window.
    pub page: PageRequest,
}

/// Resolve a raw status selector into a set of status ids.
///
/// `"active"` → {1,2}, `"completed"` → {3,4}, a numeric string → that single
/// id, anything else (including absence) → no constraint.
pub fn resolve_status_ids(status: Option<&str>) -> Option<Vec<i32>> {
    let s = status?.trim();
    match s {
        "" => None,
        "active" => Some(ReportStatus::active_ids().to_vec()),
        "completed" => Some(ReportStatus::completed_ids().to_vec()),
        _ => s.parse::<i32>().ok().map(|id| vec![id]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_group_resolves_to_pending_and_in_review() {
        assert_eq!(resolve_status_ids(Some("active")), Some(vec![1, 2]));
    }

    #[test]
    fn completed_group_resolves_to_approved_and_rejected() {
        assert_eq!(resolve_status_ids(Some("completed")), Some(vec![3, 4]));
    }

    #[test]
    fn numeric_string_resolves_to_single_id() {
        assert_eq!(resolve_status_ids(Some("2")), Some(vec![2]));
        assert_eq!(resolve_status_ids(Some(" 4 ")), Some(vec![4]));
    }

    #[test]
    fn unrecognized_selector_applies_no_filter() {
        assert_eq!(resolve_status_ids(Some("primary")), None);
        assert_eq!(resolve_status_ids(Some("banana")), None);
        assert_eq!(resolve_status_ids(None), None);
    }

    #[test]
    fn include_tokens_ignore_unknown_values() {
        let include = ReportInclude::from_tokens(&["status", "tags", "bogus"]);
        assert!(include.status);
        assert!(include.tags);
        assert!(!include.category);
        assert!(!include.user);
    }

    #[test]
    fn sort_defaults_to_recent() {
        assert_eq!(ReportSort::parse(None), ReportSort::Recent);
        assert_eq!(ReportSort::parse(Some("weird")), ReportSort::Recent);
        assert_eq!(ReportSort::parse(Some("popular")), ReportSort::Popular);
    }
}
