//! Prelude module for the HAPI client library
//!
//! Re-exports the most commonly used items so a typical embedding can get
//! by with a single `use hapi_client::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hapi_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let session = HapiSession::new()?;
//!     for server in session.servers().await {
//!         println!("{}", server.url);
//!     }
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, HapiError, Result, WindowError};

// Essential app components
pub use crate::app::{
    CacheConfig, ClientConfig, DataResponse, Dataset, DatasetInfo, HapiCatalogClient, HapiClient,
    HapiInfoClient, HapiSession, Parameter, Server, ServerRegistryClient, StaleCache, TimeWindow,
    fallback_servers, full_window, parse_records, parse_server_directory, preview_window,
};

// Commonly used constants
pub use crate::constants::{MAX_SAMPLE_RECORDS, PREVIEW_WINDOW_DAYS, SERVER_DIRECTORY_URL, STATUS_OK};
