//! Self-service account management.

use std::sync::Arc;

use tracing::info;

use reporthub_auth::password::PasswordHasher;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_database::repositories::user::UserRepository;
use reporthub_entity::user::{CreateUser, UpdateUser, User, UserStats};

use crate::context::RequestContext;

/// Registration and self-service profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a regular user account.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> AppResult<User> {
        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
                is_admin: false,
                is_super_admin: false,
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Loads the current user's account.
    pub async fn get_me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", ctx.user_id)))
    }

    /// Loads the current user's activity counts.
    pub async fn get_my_stats(&self, ctx: &RequestContext) -> AppResult<UserStats> {
        self.users
            .stats_for_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", ctx.user_id)))
    }

    /// Updates the current user's profile; a new password is re-hashed.
    pub async fn update_me(
        &self,
        ctx: &RequestContext,
        name: Option<String>,
        email: Option<String>,
        password: Option<&str>,
    ) -> AppResult<User> {
        let password_hash = password
            .map(|p| self.hasher.hash_password(p))
            .transpose()?;

        self.users
            .update(
                ctx.user_id,
                &UpdateUser {
                    name,
                    email,
                    password_hash,
                    ..Default::default()
                },
            )
            .await
    }
}
