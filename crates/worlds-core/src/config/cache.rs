//! Membership/cache provider configuration.

use serde::{Deserialize, Serialize};

/// Cache provider configuration.
///
/// The membership store (which world each user is currently in) is backed
/// by Redis in production and by an in-memory map in development and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Provider name: `"redis"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Redis settings (used when provider is `"redis"`).
    #[serde(default)]
    pub redis: RedisConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            redis: RedisConfig::default(),
        }
    }
}

/// Redis connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Key prefix applied to every key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "worlds:".to_string()
}
