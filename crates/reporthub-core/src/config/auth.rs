//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// Access and refresh tokens are signed with separate secrets so that one
/// kind can never be replayed as the other across a secret rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: default_access_secret(),
            refresh_secret: default_refresh_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_hours: default_refresh_ttl(),
        }
    }
}

impl AuthConfig {
    /// Apply the plain `JWT_*` environment variable overrides.
    ///
    /// `JWT_ACCESS_TTL` is in minutes and `JWT_REFRESH_TTL` in hours;
    /// unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("JWT_ACCESS_SECRET") {
            self.access_secret = v;
        }
        if let Ok(v) = std::env::var("JWT_REFRESH_SECRET") {
            self.refresh_secret = v;
        }
        if let Some(v) = read_env_u64("JWT_ACCESS_TTL") {
            self.access_ttl_minutes = v;
        }
        if let Some(v) = read_env_u64("JWT_REFRESH_TTL") {
            self.refresh_ttl_hours = v;
        }
    }
}

fn read_env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn default_access_secret() -> String {
    "CHANGE_ME_ACCESS_SECRET".to_string()
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_REFRESH_SECRET".to_string()
}

fn default_access_ttl() -> u64 {
    10
}

fn default_refresh_ttl() -> u64 {
    24
}
