//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Page numbers below 1 are normalized to 1; the page size is clamped
/// to `1..=100` and defaults to 20.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request with normalized values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Normalize optional raw query values into a valid page request.
    ///
    /// Absent or non-positive values fall back to the defaults.
    pub fn from_raw(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p as u64,
            _ => 1,
        };
        let page_size = match limit {
            Some(l) if l > 0 => (l as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// Saturates instead of overflowing and stays within `i64::MAX` so the
    /// value can always be bound as a Postgres OFFSET.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest) -> Self {
        Self {
            items,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_above_max_clamps_to_100() {
        let page = PageRequest::from_raw(Some(1), Some(500));
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn absent_or_non_positive_limit_defaults_to_20() {
        assert_eq!(PageRequest::from_raw(Some(1), None).limit(), 20);
        assert_eq!(PageRequest::from_raw(Some(1), Some(0)).limit(), 20);
        assert_eq!(PageRequest::from_raw(Some(1), Some(-5)).limit(), 20);
    }

    #[test]
    fn absent_or_non_positive_page_defaults_to_1() {
        assert_eq!(PageRequest::from_raw(None, Some(10)).page, 1);
        assert_eq!(PageRequest::from_raw(Some(0), Some(10)).page, 1);
        assert_eq!(PageRequest::from_raw(Some(-3), Some(10)).page, 1);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let page = PageRequest::from_raw(Some(3), Some(25));
        assert_eq!(page.offset(), 50);
    }

    #[test]
    fn offset_saturates_for_huge_page_numbers() {
        let page = PageRequest::from_raw(Some(i64::MAX), Some(100));
        assert_eq!(page.offset(), i64::MAX as u64);
        assert!(i64::try_from(page.offset()).is_ok());
    }
}
