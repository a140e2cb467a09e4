//! Core client logic for the HAPI protocol
//!
//! This module contains the protocol clients (server registry, catalog,
//! per-dataset info/data), the CSV record parser, the time-window policy,
//! the staleness cache, and the session facade that ties them together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hapi_client::app::HapiSession;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = HapiSession::new()?;
//!
//! for server in session.servers().await {
//!     println!("{}: {}", server.id, server.url);
//! }
//!
//! let datasets = session.catalog("https://cdaweb.gsfc.nasa.gov/hapi").await?;
//! if let Some(dataset) = datasets.first() {
//!     let preview = session
//!         .preview("https://cdaweb.gsfc.nasa.gov/hapi", &dataset.id)
//!         .await?;
//!     println!("{} rows", preview.rows.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod client;
pub mod info;
pub mod models;
pub mod records;
pub mod registry;
pub mod session;
pub mod window;

// Re-export main public API
pub use cache::{CacheConfig, StaleCache};
pub use catalog::HapiCatalogClient;
pub use client::{ClientConfig, HapiClient};
pub use info::HapiInfoClient;
pub use models::{DataResponse, Dataset, DatasetInfo, HapiStatus, Parameter, Server};
pub use records::parse_records;
pub use registry::{fallback_servers, parse_server_directory, ServerRegistryClient};
pub use session::HapiSession;
pub use window::{full_window, preview_window, TimeWindow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = ClientConfig::default();
        assert!(config.tcp_nodelay);
        assert_eq!(fallback_servers().len(), 5);
    }
}
