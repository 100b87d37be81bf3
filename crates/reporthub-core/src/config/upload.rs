//! File upload configuration.

use serde::{Deserialize, Serialize};

/// Image upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory where uploaded files are written.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Public URL prefix under which uploads are served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum upload size in bytes (default 5 MB).
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            public_prefix: default_public_prefix(),
            max_size_bytes: default_max_size(),
        }
    }
}

fn default_directory() -> String {
    "data/uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_size() -> u64 {
    5 * 1024 * 1024
}
