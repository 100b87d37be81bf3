//! Database configuration.

use serde::{Deserialize, Serialize};

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Apply the plain `DB_*` environment variable overrides.
    ///
    /// When `DB_HOST` is set, the connection URL is recomposed from
    /// `DB_HOST`/`DB_USER`/`DB_PASS`/`DB_NAME` and replaces whatever the
    /// files configured.
    pub fn apply_env_overrides(&mut self) {
        let Ok(host) = std::env::var("DB_HOST") else {
            return;
        };
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let pass = std::env::var("DB_PASS").unwrap_or_default();
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "reporthub".to_string());

        self.url = if pass.is_empty() {
            format!("postgres://{user}@{host}/{name}")
        } else {
            format!("postgres://{user}:{pass}@{host}/{name}")
        };
    }
}

fn default_url() -> String {
    "postgres://localhost/reporthub".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
