//! Configuration schema definitions.
//!
//! All types derive Serde traits so consumers can deserialize them from
//! whatever config source they use.

use serde::{Deserialize, Serialize};

/// Client configuration: endpoint, per-attempt deadline, attempt budget.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL (scheme + host, no trailing slash required).
    pub base_url: String,

    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,

    /// Total attempts per logical request, first try included.
    pub retry_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://chits-backend.vercel.app".to_string(),
            timeout_ms: 10_000,
            retry_attempts: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://chits-backend.vercel.app");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.retry_attempts, 3);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:3000"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.retry_attempts, 3);
    }
}
