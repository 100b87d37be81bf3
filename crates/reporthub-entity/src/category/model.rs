//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A report category (e.g. phishing, fake shop, investment scam).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Unique category name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
}

/// A category joined with how many reports use it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryUsage {
    /// Category name.
    pub name: String,
    /// Number of reports filed under this category.
    pub usage_count: i64,
}
