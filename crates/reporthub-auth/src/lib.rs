//! # reporthub-auth
//!
//! Authentication primitives for ReportHub.
//!
//! ## Modules
//!
//! - `jwt`: claims, token pair creation and validation
//! - `password`: Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::PasswordHasher;
