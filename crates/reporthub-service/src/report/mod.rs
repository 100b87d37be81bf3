//! Report business logic.

pub mod moderation;
pub mod service;

pub use moderation::ModerationService;
pub use service::{CreateReportInput, ReportService};
