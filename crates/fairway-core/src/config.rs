//! Configuration management for the Fairway Concierge toolkit

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection configuration
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, e.g. `https://api.golfinmallorca.example`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path prefix under which the REST resources live
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_root() -> String {
    "/api".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        // The backend address usually arrives through the environment,
        // matching the original deployment's build-time variable.
        let base_url = std::env::var("FAIRWAY_BACKEND_URL")
            .or_else(|_| std::env::var("BACKEND_URL"))
            .unwrap_or_else(|_| default_base_url());

        Self {
            base_url,
            api_root: default_api_root(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// Environment keys use a double underscore between table and field,
    /// e.g. `FAIRWAY_BACKEND__BASE_URL`, so field names may themselves
    /// contain underscores.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::from_sources(config::Environment::with_prefix("FAIRWAY").separator("__"))
    }

    fn from_sources(env: config::Environment) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(env)
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl BackendConfig {
    /// Full prefix for REST resource paths, e.g. `http://host:8000/api`
    pub fn api_base(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_root
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.backend.base_url.starts_with("http"));
        assert_eq!(config.backend.api_root, "/api");
        assert_eq!(config.backend.request_timeout, 30);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_api_base_joins_without_double_slash() {
        let backend = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            api_root: "/api".to_string(),
            request_timeout: 30,
        };

        assert_eq!(backend.api_base(), "http://localhost:8000/api");
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.backend.base_url, config.backend.base_url);
        assert_eq!(deserialized.backend.api_root, config.backend.api_root);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "backend": {"base_url": "https://api.example.com"}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.api_root, "/api"); // Uses default
        assert_eq!(config.backend.request_timeout, 30); // Uses default
        assert_eq!(config.logging.level, "info"); // Uses default
    }

    #[test]
    fn test_environment_keys_reach_nested_fields() {
        let vars = std::collections::HashMap::from([
            (
                "FAIRWAY_BACKEND__BASE_URL".to_string(),
                "https://api.example.com".to_string(),
            ),
            ("FAIRWAY_BACKEND__API_ROOT".to_string(), "/v2".to_string()),
        ]);
        let env = config::Environment::with_prefix("FAIRWAY")
            .separator("__")
            .source(Some(vars));

        let config = Config::from_sources(env).unwrap();

        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.api_root, "/v2");
        assert_eq!(config.backend.request_timeout, 30); // Untouched by the env
    }

    #[test]
    fn test_default_value_functions() {
        assert_eq!(default_base_url(), "http://localhost:8000");
        assert_eq!(default_api_root(), "/api");
        assert_eq!(default_request_timeout(), 30);
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "text");
    }
}
