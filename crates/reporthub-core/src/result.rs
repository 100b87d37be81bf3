//! Result alias used across all ReportHub crates.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`, the return type of every fallible
/// repository, service, and handler operation.
pub type AppResult<T> = Result<T, AppError>;
