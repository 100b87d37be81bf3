//! JWT claims structure used in access and refresh tokens.

use serde::{Deserialize, Serialize};

use reporthub_entity::user::User;

/// JWT claims payload embedded in every token.
///
/// Carries the user profile so request handling never needs a database
/// round-trip just to know who is calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: i64,
    /// Email at the time of token issuance.
    pub email: String,
    /// Display name at the time of token issuance.
    pub name: String,
    /// Admin flag at the time of token issuance.
    pub is_admin: bool,
    /// Super-admin flag at the time of token issuance.
    pub is_super_admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> i64 {
        self.sub
    }

    /// Whether the subject had moderation privileges when the token was
    /// issued.
    pub fn is_moderator(&self) -> bool {
        self.is_admin || self.is_super_admin
    }
}

impl From<&User> for Claims {
    /// Seed claims from a user row; timestamps and token type are filled
    /// in by the encoder.
    fn from(user: &User) -> Self {
        Self {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
            is_super_admin: user.is_super_admin,
            iat: 0,
            exp: 0,
            token_type: TokenType::Access,
        }
    }
}
