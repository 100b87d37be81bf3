//! Notification business logic.

pub mod service;

pub use service::NotificationService;
