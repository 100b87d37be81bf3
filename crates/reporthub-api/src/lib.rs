//! # reporthub-api
//!
//! HTTP API layer for ReportHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs, static upload serving, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
