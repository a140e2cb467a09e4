//! Configuration management for the HAPI client
//!
//! This module provides unified configuration with multi-source loading and
//! zero-config defaults: every setting has a sensible default, an optional
//! TOML file overrides them, and the CLI can point at an explicit file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{CacheConfig, ClientConfig};
use crate::constants::{directory, http, logging};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP client settings
    pub client: ClientConfigToml,
    /// Staleness cache TTLs
    pub cache: CacheConfigToml,
    /// Server directory settings
    pub registry: RegistryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigToml {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Connection pool idle timeout in seconds (None = no timeout)
    pub pool_idle_timeout_secs: Option<u64>,
    /// Maximum idle connections per host
    pub pool_max_per_host: usize,
    /// TCP nodelay setting
    pub tcp_nodelay: bool,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            request_timeout_secs: http::DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: http::CONNECT_TIMEOUT.as_secs(),
            pool_idle_timeout_secs: Some(http::POOL_IDLE_TIMEOUT.as_secs()),
            pool_max_per_host: http::POOL_MAX_PER_HOST,
            tcp_nodelay: true,
        }
    }
}

/// TOML-friendly cache TTL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfigToml {
    /// Server directory TTL in seconds
    pub servers_ttl_secs: u64,
    /// Catalog TTL in seconds
    pub catalog_ttl_secs: u64,
    /// Info TTL in seconds
    pub info_ttl_secs: u64,
    /// Data TTL in seconds
    pub data_ttl_secs: u64,
}

impl Default for CacheConfigToml {
    fn default() -> Self {
        let defaults = CacheConfig::default();
        Self {
            servers_ttl_secs: defaults.servers_ttl.as_secs(),
            catalog_ttl_secs: defaults.catalog_ttl.as_secs(),
            info_ttl_secs: defaults.info_ttl.as_secs(),
            data_ttl_secs: defaults.data_ttl.as_secs(),
        }
    }
}

/// Server directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// URL of the global server directory
    pub directory_url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            directory_url: directory::SERVER_DIRECTORY_URL.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level for the application
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Convert TOML-friendly configuration to runtime configuration
    pub fn to_runtime_config(&self) -> (ClientConfig, CacheConfig) {
        (
            self.client.to_runtime_config(),
            self.cache.to_runtime_config(),
        )
    }

    /// Load configuration: defaults first, then the config file when one
    /// exists (an explicitly specified file must exist)
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = if let Some(ref path) = config_file_override {
            Some(path.clone())
        } else {
            Self::find_config_file()
        };

        if let Some(path) = config_path {
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                return Self::load_from_file(&path).await;
            } else if config_file_override.is_some() {
                return Err(ConfigError::NotFound { path });
            }
        }

        Ok(Self::default())
    }

    /// Find a configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from("./hapi-client.toml")];
        if let Some(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// The default config file path for the current user
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hapi-client").join("config.toml"))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &PathBuf) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

impl ClientConfigToml {
    /// Convert to runtime ClientConfig
    pub fn to_runtime_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            pool_idle_timeout: self.pool_idle_timeout_secs.map(Duration::from_secs),
            pool_max_per_host: self.pool_max_per_host,
            tcp_nodelay: self.tcp_nodelay,
        }
    }
}

impl CacheConfigToml {
    /// Convert to runtime CacheConfig
    pub fn to_runtime_config(&self) -> CacheConfig {
        CacheConfig {
            servers_ttl: Duration::from_secs(self.servers_ttl_secs),
            catalog_ttl: Duration::from_secs(self.catalog_ttl_secs),
            info_ttl: Duration::from_secs(self.info_ttl_secs),
            data_ttl: Duration::from_secs(self.data_ttl_secs),
        }
    }
}
