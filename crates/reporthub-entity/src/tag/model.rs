//! Tag entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A free-form label associated with reports (many-to-many).
///
/// Names are unique and stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: i64,
    /// Unique lowercase tag name.
    pub name: String,
}

/// Normalize raw tag names: trim, lowercase, drop empties, deduplicate
/// while preserving first-seen order.
pub fn normalize_tag_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.iter()
        .map(|n| n.as_ref().trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_lowercases_and_dedupes() {
        let names = normalize_tag_names(&["  Phishing ", "BANK", "phishing", "", "  "]);
        assert_eq!(names, vec!["phishing", "bank"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize_tag_names::<&str>(&[]).is_empty());
    }
}
