//! Login and token refresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use reporthub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use reporthub_auth::password::PasswordHasher;
use reporthub_core::error::AppError;
use reporthub_core::result::AppResult;
use reporthub_database::repositories::user::UserRepository;
use reporthub_entity::user::User;

use crate::context::RequestContext;

/// Authenticates users and issues JWT token pairs.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Token decoder.
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<UserRepository>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            encoder,
            decoder,
        }
    }

    /// Verifies credentials and issues an access + refresh token pair.
    ///
    /// A missing user and a wrong password produce the same error, so the
    /// response does not reveal which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, TokenPair)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let tokens = self.encoder.generate_token_pair(&user)?;
        info!(user_id = user.id, "User logged in");

        Ok((user, tokens))
    }

    /// Exchanges a valid refresh token for a fresh access token.
    ///
    /// The user row is re-read so a deleted account cannot keep minting
    /// access tokens from an old refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(User, String, DateTime<Utc>)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

        let (access_token, expires_at) = self.encoder.generate_access_token(&user)?;
        Ok((user, access_token, expires_at))
    }

    /// Loads the profile of the authenticated user.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", ctx.user_id)))
    }
}
