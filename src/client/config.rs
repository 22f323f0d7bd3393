//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`RequestClient`](super::RequestClient).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every request path, e.g. `https://api.example.com/v2`.
    pub base_address: String,
    /// Client-wide timeout in milliseconds. Falls back to
    /// [`DEFAULT_TIMEOUT_MS`](crate::http::DEFAULT_TIMEOUT_MS) when unset.
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base address.
    pub fn base_address(mut self, base_address: impl Into<String>) -> Self {
        self.base_address = base_address.into();
        self
    }

    /// Set the client-wide timeout.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Join the base address with a path (and query string).
    pub fn address_for(&self, path: &str) -> String {
        format!("{}{}", self.base_address, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .base_address("http://localhost:3000/api")
            .timeout_ms(1500);
        assert_eq!(config.base_address, "http://localhost:3000/api");
        assert_eq!(config.timeout_ms, Some(1500));
        assert_eq!(
            config.address_for("/chats?offset=0"),
            "http://localhost:3000/api/chats?offset=0"
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "base_address": "http://example.test" }"#).unwrap();
        assert_eq!(config.base_address, "http://example.test");
        assert_eq!(config.timeout_ms, None);
    }
}
