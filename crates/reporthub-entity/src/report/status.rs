//! Report lifecycle status.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Lifecycle stage of a report.
///
/// The numeric ids match the seeded `report_statuses` rows; any from→to
/// pair is an accepted moderation transition as long as to ≠ from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Newly submitted, awaiting moderation.
    Pending,
    /// Picked up by a moderator.
    InReview,
    /// Accepted as a genuine fraud report.
    Approved,
    /// Dismissed by moderation.
    Rejected,
}

impl ReportStatus {
    /// The database id of this status.
    pub fn id(&self) -> i32 {
        match self {
            Self::Pending => 1,
            Self::InReview => 2,
            Self::Approved => 3,
            Self::Rejected => 4,
        }
    }

    /// Look up a status by its database id.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::InReview),
            3 => Some(Self::Approved),
            4 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Statuses considered "active" (still being worked).
    pub fn active_ids() -> &'static [i32] {
        &[1, 2]
    }

    /// Statuses considered "completed" (moderation finished).
    pub fn completed_ids() -> &'static [i32] {
        &[3, 4]
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `report_statuses` table row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusRow {
    /// Status id.
    pub id: i32,
    /// Status name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::InReview,
            ReportStatus::Approved,
            ReportStatus::Rejected,
        ] {
            assert_eq!(ReportStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(ReportStatus::from_id(0), None);
        assert_eq!(ReportStatus::from_id(5), None);
    }
}
