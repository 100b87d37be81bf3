//! Report status moderation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An append-only record of a moderation status change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportStatusHistory {
    /// Unique history entry identifier.
    pub id: i64,
    /// The report that was moderated.
    pub report_id: i64,
    /// Status before the change.
    pub from_status_id: i32,
    /// Status after the change.
    pub to_status_id: i32,
    /// Moderation note (auto-generated when the moderator left none).
    pub note: String,
    /// Fixed reason string describing the kind of change.
    pub change_reason: String,
    /// The moderator who made the change.
    pub changed_by: i64,
    /// When the change happened.
    pub changed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entry_serializes_with_audit_fields() {
        let entry = ReportStatusHistory {
            id: 7,
            report_id: 42,
            from_status_id: 1,
            to_status_id: 3,
            note: "Status changed from pending to approved".to_string(),
            change_reason: "Status updated by moderator".to_string(),
            changed_by: 5,
            changed_at: Utc::now(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["report_id"], 42);
        assert_eq!(json["from_status_id"], 1);
        assert_eq!(json["to_status_id"], 3);
        assert_eq!(json["changed_by"], 5);
    }
}
