/// Configuration for the BragBoard client
///
/// Loads configuration from environment variables.
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the recognition API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default values
fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(ClientConfig {
            base_url: std::env::var("BRAGBOARD_API_URL").unwrap_or_else(|_| default_base_url()),
            timeout_secs: std::env::var("BRAGBOARD_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("BRAGBOARD_API_URL", "https://recognition.internal");
        std::env::set_var("BRAGBOARD_HTTP_TIMEOUT_SECS", "5");

        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config.base_url, "https://recognition.internal");
        assert_eq!(config.timeout_secs, 5);

        std::env::remove_var("BRAGBOARD_API_URL");
        std::env::remove_var("BRAGBOARD_HTTP_TIMEOUT_SECS");
    }
}
