//! World importer configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the world-transfer importer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Known target environments, mapping name to the base URL of that
    /// environment's worlds API.
    #[serde(default)]
    pub environments: HashMap<String, String>,
    /// HTTP timeout for remote version probes, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ImporterConfig {
    /// Look up the base URL for a named environment.
    pub fn environment_url(&self, name: &str) -> Option<&str> {
        self.environments.get(name).map(String::as_str)
    }
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_lookup() {
        let config = ImporterConfig {
            environments: HashMap::from([(
                "staging".to_string(),
                "http://staging.local".to_string(),
            )]),
            request_timeout_seconds: 10,
        };
        assert_eq!(
            config.environment_url("staging"),
            Some("http://staging.local")
        );
        assert_eq!(config.environment_url("production"), None);
    }
}
