//! Cache configuration types and defaults
//!
//! TTLs are per resource class: the server directory changes rarely,
//! catalogs and info drift on the order of minutes, data responses sit in
//! between. These are policy values the embedding application may override.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::cache;

/// Configuration for the staleness cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for the global server directory
    pub servers_ttl: Duration,
    /// TTL for per-server catalogs
    pub catalog_ttl: Duration,
    /// TTL for per-dataset info responses
    pub info_ttl: Duration,
    /// TTL for preview/full data responses
    pub data_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            servers_ttl: cache::SERVERS_TTL,
            catalog_ttl: cache::CATALOG_TTL,
            info_ttl: cache::INFO_TTL,
            data_ttl: cache::DATA_TTL,
        }
    }
}

impl CacheConfig {
    /// Set the server-directory TTL
    pub fn with_servers_ttl(mut self, ttl: Duration) -> Self {
        self.servers_ttl = ttl;
        self
    }

    /// Set the catalog TTL
    pub fn with_catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }

    /// Set the info TTL
    pub fn with_info_ttl(mut self, ttl: Duration) -> Self {
        self.info_ttl = ttl;
        self
    }

    /// Set the data TTL
    pub fn with_data_ttl(mut self, ttl: Duration) -> Self {
        self.data_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = CacheConfig::default();
        assert_eq!(config.servers_ttl, Duration::from_secs(3600));
        assert_eq!(config.catalog_ttl, Duration::from_secs(300));
        assert_eq!(config.data_ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::default()
            .with_servers_ttl(Duration::from_secs(10))
            .with_catalog_ttl(Duration::from_secs(20))
            .with_info_ttl(Duration::from_secs(30))
            .with_data_ttl(Duration::from_secs(40));

        assert_eq!(config.servers_ttl, Duration::from_secs(10));
        assert_eq!(config.catalog_ttl, Duration::from_secs(20));
        assert_eq!(config.info_ttl, Duration::from_secs(30));
        assert_eq!(config.data_ttl, Duration::from_secs(40));
    }
}
