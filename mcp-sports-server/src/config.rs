//! Configuration for mcp-sports-server
//!
//! Values are layered: built-in defaults, an optional TOML file, prefixed
//! environment variables (`MCP_SPORTS__BACKEND__TIMEOUT_MS`), and finally the
//! flat variables older deployments still set (`BACKEND_API_URL`, `PORT`, ...).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, ServerError};

/// Default configuration file name (without extension)
const DEFAULT_CONFIG_FILE: &str = "mcp-sports-server";

/// Main server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Upstream sports API configuration
    pub backend: BackendConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Public MCP endpoint advertised in /.well-known/mcp-config
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

/// Upstream sports API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the sports API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Log every outbound request before sending it
    #[serde(default)]
    pub debug: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_public_url() -> String {
    "https://mcp.balldontlie.io/mcp".to_string()
}

fn default_base_url() -> String {
    "https://api.balldontlie.io".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Load configuration from defaults, file and environment.
    ///
    /// The file is `mcp-sports-server.toml` in the working directory unless
    /// `MCP_SPORTS_CONFIG` points elsewhere; it is optional either way.
    pub fn load() -> Result<Self> {
        let file = std::env::var("MCP_SPORTS_CONFIG").ok();
        let file_source = match file.as_deref() {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let port = std::env::var("PORT")
            .ok()
            .map(|port| format!("0.0.0.0:{}", port));

        let config: Config = Self::defaults()?
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("MCP_SPORTS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.listen_addr", port)?
            .set_override_option("backend.base_url", std::env::var("BACKEND_API_URL").ok())?
            .set_override_option("backend.timeout_ms", std::env::var("API_TIMEOUT").ok())?
            .set_override_option(
                "backend.debug",
                std::env::var("ENABLE_DEBUG").ok().map(|v| v == "true"),
            )?
            .set_override_option("logging.level", std::env::var("LOG_LEVEL").ok())?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string on top of the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = Self::defaults()?
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("server.listen_addr", default_listen_addr())?
            .set_default("server.public_url", default_public_url())?
            .set_default("backend.base_url", default_base_url())?
            .set_default("backend.timeout_ms", default_timeout_ms())?
            .set_default("backend.debug", false)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.backend.base_url).map_err(|e| {
            ServerError::Config(format!(
                "Invalid backend base URL '{}': {}",
                self.backend.base_url, e
            ))
        })?;

        if self.backend.timeout_ms == 0 {
            return Err(ServerError::Config(
                "backend.timeout_ms must be greater than zero".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ServerError::Config(format!(
                    "Unknown log format '{}' (expected \"pretty\" or \"json\")",
                    other
                )))
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: default_listen_addr(),
                public_url: default_public_url(),
            },
            backend: BackendConfig {
                base_url: default_base_url(),
                timeout_ms: default_timeout_ms(),
                debug: false,
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
listen_addr = "127.0.0.1:9000"

[backend]
base_url = "http://localhost:8080"
debug = true
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert!(config.backend.debug);
        // untouched keys keep their defaults
        assert_eq!(config.backend.timeout_ms, 30_000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let toml = r#"
[backend]
base_url = "not a url"
"#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Invalid backend base URL"));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.backend.timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
