//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, when present) on top of defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default upstream for the Family Tree API.
pub const DEFAULT_FAMILYSEARCH_BASE_URL: &str = "https://www.familysearch.org";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream FamilySearch API configuration.
    pub familysearch: FamilySearchConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where the FamilySearch API lives.
///
/// Access tokens are not configuration: callers pass one with every tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilySearchConfig {
    /// Base URL the `/platform/tree/...` endpoints are resolved against.
    pub base_url: String,
}

impl Default for FamilySearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FAMILYSEARCH_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "familysearch".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            familysearch: FamilySearchConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_` (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_FAMILYSEARCH_BASE_URL`, ...). The plain `PORT` variable is also
    /// honoured for the HTTP transport.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_FAMILYSEARCH_BASE_URL") {
            info!("FamilySearch base URL overridden: {}", base_url);
            config.familysearch.base_url = base_url;
        }

        config
    }
}
