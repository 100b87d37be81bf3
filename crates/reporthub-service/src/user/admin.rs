//! Administrative user management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use reporthub_auth::password::PasswordHasher;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::{PageRequest, PageResponse};
use reporthub_database::repositories::user::UserRepository;
use reporthub_entity::user::{CreateUser, UpdateUser, User, UserStats};

use crate::context::RequestContext;

/// Per-user activity counts together with system-wide totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsOverview {
    /// One entry per user.
    pub users: Vec<UserStats>,
    /// Total reports across all users.
    pub total_reports: i64,
    /// Total comments across all users.
    pub total_comments: i64,
    /// Total votes across all users.
    pub total_votes: i64,
}

/// Admin-only user management operations.
///
/// The HTTP layer already gates these routes behind the admin guard; the
/// super-admin rules are re-checked here because they depend on the target.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a new admin account.
    pub async fn register_admin(
        &self,
        ctx: &RequestContext,
        email: &str,
        name: &str,
        password: &str,
    ) -> AppResult<User> {
        let user = self.create_with_flags(email, name, password, true, false).await?;
        info!(user_id = user.id, created_by = ctx.user_id, "Admin account created");
        Ok(user)
    }

    /// Registers a new super-admin account. Only super admins may do this.
    pub async fn register_super_admin(
        &self,
        ctx: &RequestContext,
        email: &str,
        name: &str,
        password: &str,
    ) -> AppResult<User> {
        if !ctx.is_super_admin {
            return Err(AppError::forbidden(
                "Only a super admin can create super admin accounts",
            ));
        }

        let user = self.create_with_flags(email, name, password, true, true).await?;
        info!(user_id = user.id, created_by = ctx.user_id, "Super admin account created");
        Ok(user)
    }

    /// Bootstraps the first super-admin account.
    ///
    /// Allowed only while no super admin exists, so the route cannot be
    /// used for privilege escalation once the system is set up.
    pub async fn init_super_admin(&self, email: &str, name: &str, password: &str) -> AppResult<User> {
        if self.users.super_admin_exists().await? {
            return Err(AppError::forbidden("A super admin already exists"));
        }

        let user = self.create_with_flags(email, name, password, true, true).await?;
        info!(user_id = user.id, "Initial super admin created");
        Ok(user)
    }

    /// Lists all users.
    pub async fn list_users(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.find_all(page).await
    }

    /// Per-user activity counts plus system-wide totals.
    pub async fn user_stats(&self) -> AppResult<UserStatsOverview> {
        let users = self.users.stats_for_all().await?;
        let total_reports = users.iter().map(|u| u.report_count).sum();
        let total_comments = users.iter().map(|u| u.comment_count).sum();
        let total_votes = users.iter().map(|u| u.vote_count).sum();

        Ok(UserStatsOverview {
            users,
            total_reports,
            total_comments,
            total_votes,
        })
    }

    /// Loads one user by id.
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Updates a user's profile and privilege flags.
    ///
    /// Privilege flags can only be changed by a super admin.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: i64,
        mut data: UpdateUser,
        password: Option<&str>,
    ) -> AppResult<User> {
        if (data.is_admin.is_some() || data.is_super_admin.is_some()) && !ctx.is_super_admin {
            return Err(AppError::forbidden(
                "Only a super admin can change privilege flags",
            ));
        }

        data.password_hash = password
            .map(|p| self.hasher.hash_password(p))
            .transpose()?;

        self.users.update(id, &data).await
    }

    /// Deletes a user account.
    ///
    /// Super-admin accounts can only be removed by another super admin,
    /// and nobody can delete their own account through this route.
    pub async fn delete_user(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if id == ctx.user_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }

        let target = self.get_user(id).await?;
        if target.is_super_admin && !ctx.is_super_admin {
            return Err(AppError::forbidden(
                "Only a super admin can delete a super admin account",
            ));
        }

        if !self.users.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        info!(user_id = id, deleted_by = ctx.user_id, "User deleted");
        Ok(())
    }

    async fn create_with_flags(
        &self,
        email: &str,
        name: &str,
        password: &str,
        is_admin: bool,
        is_super_admin: bool,
    ) -> AppResult<User> {
        let password_hash = self.hasher.hash_password(password)?;
        self.users
            .create(&CreateUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
                is_admin,
                is_super_admin,
            })
            .await
    }
}
