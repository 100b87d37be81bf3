//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use reporthub_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Both values are optional; normalization (defaults, clamping) happens
/// in [`PageRequest::from_raw`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<i64>,
    /// Items per page (default: 20, max: 100).
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_raw(self.page, self.limit)
    }
}
