//! # reporthub-service
//!
//! Business logic service layer for ReportHub. Each service orchestrates
//! repositories and authentication primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod category;
pub mod comment;
pub mod context;
pub mod notification;
pub mod report;
pub mod user;

pub use category::CategoryService;
pub use comment::CommentService;
pub use context::RequestContext;
pub use notification::NotificationService;
pub use report::{ModerationService, ReportService};
pub use user::{AdminUserService, AuthService, UserService};
