//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user in the ReportHub system.
///
/// Admin privileges are plain flags rather than a role hierarchy: regular
/// admins moderate reports and manage users, super admins can additionally
/// create other admins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Email address (unique, used for login).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2id password hash (PHC string; the salt is embedded).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user can moderate reports and manage users.
    pub is_admin: bool,
    /// Whether the user can additionally create other admins.
    pub is_super_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user has moderation privileges.
    pub fn is_moderator(&self) -> bool {
        self.is_admin || self.is_super_admin
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Whether to grant admin privileges.
    pub is_admin: bool,
    /// Whether to grant super-admin privileges.
    pub is_super_admin: bool,
}

/// Data for a partial user update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
    /// New admin flag (admin-managed updates only).
    pub is_admin: Option<bool>,
    /// New super-admin flag (admin-managed updates only).
    pub is_super_admin: Option<bool>,
}

/// A user row joined with aggregate activity counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserStats {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Admin flag.
    pub is_admin: bool,
    /// Super-admin flag.
    pub is_super_admin: bool,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// Number of reports the user has submitted.
    pub report_count: i64,
    /// Number of comments the user has written.
    pub comment_count: i64,
    /// Number of votes the user has cast.
    pub vote_count: i64,
}
