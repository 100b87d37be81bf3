//! Concrete repository implementations, one per aggregate.

pub mod category;
pub mod comment;
pub mod notification;
pub mod report;
pub mod tag;
pub mod user;

pub use category::CategoryRepository;
pub use comment::CommentRepository;
pub use notification::NotificationRepository;
pub use report::ReportRepository;
pub use tag::TagRepository;
pub use user::UserRepository;
