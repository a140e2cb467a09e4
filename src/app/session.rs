//! Cached HAPI session facade
//!
//! `HapiSession` is the embedding-application entry point: one shared HTTP
//! client, the three protocol clients, and a staleness cache per resource
//! class. Cache keys are (server, resource, params) tuples, so the same
//! dataset on two servers never collides and a preview never shadows a
//! full-range fetch.

use std::sync::Arc;

use crate::app::cache::{CacheConfig, StaleCache};
use crate::app::catalog::HapiCatalogClient;
use crate::app::client::{ClientConfig, HapiClient};
use crate::app::info::HapiInfoClient;
use crate::app::models::{DataResponse, Dataset, DatasetInfo, Server};
use crate::app::registry::{self, ServerRegistryClient};
use crate::app::window;
use crate::config::AppConfig;
use crate::constants::hapi;
use crate::errors::{AppError, HapiResult, Result};

/// Cache key for one memoized request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    server: String,
    resource: &'static str,
    params: String,
}

impl CacheKey {
    fn new(server: &str, resource: &'static str, params: &str) -> Self {
        Self {
            server: server.to_string(),
            resource,
            params: params.to_string(),
        }
    }
}

/// Cached facade over the registry, catalog, and info clients
#[derive(Debug)]
pub struct HapiSession {
    registry: ServerRegistryClient,
    catalog_client: HapiCatalogClient,
    info_client: HapiInfoClient,
    cache_config: CacheConfig,
    servers_cache: StaleCache<CacheKey, Vec<Server>>,
    catalog_cache: StaleCache<CacheKey, Vec<Dataset>>,
    info_cache: StaleCache<CacheKey, DatasetInfo>,
    data_cache: StaleCache<CacheKey, DataResponse>,
}

impl HapiSession {
    /// Create a session with default client and cache configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), CacheConfig::default())
    }

    /// Create a session with custom client and cache configuration
    pub fn with_config(client_config: ClientConfig, cache_config: CacheConfig) -> Result<Self> {
        let client = Arc::new(HapiClient::with_config(client_config)?);

        Ok(Self {
            registry: ServerRegistryClient::new(Arc::clone(&client)),
            catalog_client: HapiCatalogClient::new(Arc::clone(&client)),
            info_client: HapiInfoClient::new(client),
            cache_config,
            servers_cache: StaleCache::new(),
            catalog_cache: StaleCache::new(),
            info_cache: StaleCache::new(),
            data_cache: StaleCache::new(),
        })
    }

    /// Create a session from loaded application configuration
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        let (client_config, cache_config) = config.to_runtime_config();
        let client = Arc::new(HapiClient::with_config(client_config)?);

        Ok(Self {
            registry: ServerRegistryClient::new(Arc::clone(&client))
                .with_directory_url(config.registry.directory_url.clone()),
            catalog_client: HapiCatalogClient::new(Arc::clone(&client)),
            info_client: HapiInfoClient::new(client),
            cache_config,
            servers_cache: StaleCache::new(),
            catalog_cache: StaleCache::new(),
            info_cache: StaleCache::new(),
            data_cache: StaleCache::new(),
        })
    }

    /// Known servers: the global directory when reachable, the static
    /// fallback table otherwise
    ///
    /// A directory outage is cached like any other result: the empty list
    /// sits under the servers TTL and the fallback table is served until
    /// it expires. The directory is not re-consulted early. Callers that
    /// need an immediate retry can [`clear_caches`](Self::clear_caches).
    pub async fn servers(&self) -> Vec<Server> {
        let key = CacheKey::new("hapi-server.org", "servers", "");
        let servers = self
            .servers_cache
            .get_or_fetch(key, self.cache_config.servers_ttl, || async {
                Ok::<_, AppError>(self.registry.list_servers().await)
            })
            .await
            .unwrap_or_default();

        if servers.is_empty() {
            registry::fallback_servers()
        } else {
            servers
        }
    }

    /// A server's enriched dataset catalog
    pub async fn catalog(&self, server_url: &str) -> HapiResult<Vec<Dataset>> {
        let key = CacheKey::new(server_url, "catalog", "");
        self.catalog_cache
            .get_or_fetch(key, self.cache_config.catalog_ttl, || {
                self.catalog_client.fetch_catalog(server_url)
            })
            .await
    }

    /// Per-dataset metadata
    pub async fn info(&self, server_url: &str, dataset_id: &str) -> HapiResult<DatasetInfo> {
        let key = CacheKey::new(server_url, "info", dataset_id);
        self.info_cache
            .get_or_fetch(key, self.cache_config.info_ttl, || {
                self.info_client.fetch_info(server_url, dataset_id)
            })
            .await
    }

    /// A bounded preview of a dataset: up to 14 calendar days from its
    /// start date, clipped to its stop date when that is earlier
    pub async fn preview(&self, server_url: &str, dataset_id: &str) -> Result<DataResponse> {
        let key = CacheKey::new(server_url, "data-preview", dataset_id);
        self.data_cache
            .get_or_fetch(key, self.cache_config.data_ttl, || async {
                let info = self.info(server_url, dataset_id).await?;
                let window =
                    window::preview_window(info.start_date.as_deref(), info.stop_date.as_deref())?;
                let data = self
                    .info_client
                    .fetch_data(server_url, dataset_id, &window, None)
                    .await?;
                Ok::<_, AppError>(data)
            })
            .await
    }

    /// A sample of a dataset's full advertised range, capped at 1000
    /// records to bound the download
    pub async fn data(&self, server_url: &str, dataset_id: &str) -> Result<DataResponse> {
        let key = CacheKey::new(server_url, "data-full", dataset_id);
        self.data_cache
            .get_or_fetch(key, self.cache_config.data_ttl, || async {
                let info = self.info(server_url, dataset_id).await?;
                let window =
                    window::full_window(info.start_date.as_deref(), info.stop_date.as_deref())?;
                let data = self
                    .info_client
                    .fetch_data(
                        server_url,
                        dataset_id,
                        &window,
                        Some(hapi::MAX_SAMPLE_RECORDS),
                    )
                    .await?;
                Ok::<_, AppError>(data)
            })
            .await
    }

    /// Drop every cached value, forcing fresh fetches
    pub async fn clear_caches(&self) {
        self.servers_cache.clear().await;
        self.catalog_cache.clear().await;
        self.info_cache.clear().await;
        self.data_cache.clear().await;
    }
}
