//! User-facing account services.

pub mod admin;
pub mod auth;
pub mod service;

pub use admin::AdminUserService;
pub use auth::AuthService;
pub use service::UserService;
