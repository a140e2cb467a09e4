//! Application constants for the HAPI client
//!
//! This module centralizes all constants used throughout the crate,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Global HAPI server directory
pub mod directory {
    /// URL of the global server directory maintained at hapi-server.org
    pub const SERVER_DIRECTORY_URL: &str = "https://hapi-server.org/servers/all.txt";

    /// Minimum field count for a well-formed directory line
    /// (url, name, id, contact, email)
    pub const MIN_SERVER_FIELDS: usize = 5;
}

/// HAPI protocol constants
pub mod hapi {
    /// The HAPI "request succeeded" status code, embedded in response bodies
    /// independently of the HTTP status
    pub const STATUS_OK: u32 = 1200;

    /// Catalog endpoint path, relative to a server base URL
    pub const CATALOG_ENDPOINT: &str = "catalog";

    /// Per-dataset metadata endpoint path
    pub const INFO_ENDPOINT: &str = "info";

    /// Data endpoint path
    pub const DATA_ENDPOINT: &str = "data";

    /// Length of the bounded preview window, in calendar days
    pub const PREVIEW_WINDOW_DAYS: u64 = 14;

    /// Record cap applied when sampling a dataset's full time range
    pub const MAX_SAMPLE_RECORDS: usize = 1000;
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "HAPI-Client/0.1.0 (Heliophysics Data Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 8;
}

/// Staleness cache TTLs, per resource class
///
/// These values are policy, not protocol, and the embedding application may
/// override them through `CacheConfig`.
pub mod cache {
    use super::Duration;

    /// TTL for the global server directory (long-lived, changes rarely)
    pub const SERVERS_TTL: Duration = Duration::from_secs(60 * 60);

    /// TTL for a server's dataset catalog
    pub const CATALOG_TTL: Duration = Duration::from_secs(5 * 60);

    /// TTL for per-dataset info responses
    pub const INFO_TTL: Duration = Duration::from_secs(5 * 60);

    /// TTL for preview/full data responses
    pub const DATA_TTL: Duration = Duration::from_secs(10 * 60);
}

/// Logging constants
pub mod logging {
    /// Default log level for the application
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

// Re-export commonly used constants for convenience
pub use cache::{CATALOG_TTL, DATA_TTL, SERVERS_TTL};
pub use directory::SERVER_DIRECTORY_URL;
pub use hapi::{MAX_SAMPLE_RECORDS, PREVIEW_WINDOW_DAYS, STATUS_OK};
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
