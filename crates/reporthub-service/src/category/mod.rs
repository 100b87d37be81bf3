//! Category business logic.

pub mod service;

pub use service::CategoryService;
