//! Report domain entities: the report itself, its lifecycle status, the
//! moderation history log, and the typed search parameters.

pub mod history;
pub mod model;
pub mod search;
pub mod status;

pub use history::ReportStatusHistory;
pub use model::{CreateReport, Report, ReportView, UpdateReport, VoteResult};
pub use search::{ReportInclude, ReportSearchParams, ReportSort, resolve_status_ids};
pub use status::{ReportStatus, StatusRow};
