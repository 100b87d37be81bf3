//! Comment business logic.

pub mod service;

pub use service::CommentService;
