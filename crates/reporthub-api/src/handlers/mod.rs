//! HTTP request handlers, grouped by domain.

pub mod admin;
pub mod auth;
pub mod category;
pub mod comment;
pub mod file;
pub mod health;
pub mod notification;
pub mod report;
pub mod user;
