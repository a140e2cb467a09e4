//! Shared HTTP client for HAPI servers
//!
//! One `HapiClient` is built per process (or per embedding session) and
//! shared by the registry, catalog, and info clients. It owns the
//! connection pool and knows how to build endpoint URLs under a server's
//! base URL with properly encoded query parameters.

mod config;
mod http;

pub use config::ClientConfig;
pub use http::HttpHandler;

use url::Url;

use crate::errors::{HapiError, HapiResult};

/// Shared HTTP client handle for all HAPI requests
#[derive(Debug)]
pub struct HapiClient {
    handler: HttpHandler,
}

impl HapiClient {
    /// Create a client with default configuration
    pub fn new() -> HapiResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> HapiResult<Self> {
        let client = config.build_http_client()?;
        Ok(Self {
            handler: HttpHandler::new(client),
        })
    }

    /// The HTTP operations handler
    pub fn handler(&self) -> &HttpHandler {
        &self.handler
    }

    /// Build an endpoint URL under a server's base URL
    ///
    /// Query values are percent-encoded by the URL builder, so dataset ids
    /// containing reserved characters survive the round trip.
    pub fn endpoint_url(
        server_url: &str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> HapiResult<Url> {
        let base = format!("{}/{}", server_url.trim_end_matches('/'), endpoint);
        let mut url = Url::parse(&base).map_err(|_| HapiError::InvalidUrl { url: base.clone() })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_plain() {
        let url =
            HapiClient::endpoint_url("https://cdaweb.gsfc.nasa.gov/hapi", "catalog", &[]).unwrap();
        assert_eq!(url.as_str(), "https://cdaweb.gsfc.nasa.gov/hapi/catalog");
    }

    #[test]
    fn test_endpoint_url_trailing_slash_collapsed() {
        let url =
            HapiClient::endpoint_url("https://cdaweb.gsfc.nasa.gov/hapi/", "catalog", &[]).unwrap();
        assert_eq!(url.as_str(), "https://cdaweb.gsfc.nasa.gov/hapi/catalog");
    }

    #[test]
    fn test_endpoint_url_query_encoding() {
        let url = HapiClient::endpoint_url(
            "https://example.org/hapi",
            "info",
            &[("id", "spase://NASA/NumericalData/ACE")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/hapi/info?id=spase%3A%2F%2FNASA%2FNumericalData%2FACE"
        );
    }

    #[test]
    fn test_endpoint_url_time_bounds() {
        let url = HapiClient::endpoint_url(
            "https://example.org/hapi",
            "data",
            &[
                ("id", "DS1"),
                ("time.min", "2020-01-01T00:00:00Z"),
                ("time.max", "2020-01-15T00:00:00Z"),
            ],
        )
        .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("time.min=2020-01-01T00%3A00%3A00Z"));
        assert!(query.contains("time.max=2020-01-15T00%3A00%3A00Z"));
    }

    #[test]
    fn test_endpoint_url_invalid_base() {
        let result = HapiClient::endpoint_url("not a url", "catalog", &[]);
        assert!(matches!(result, Err(HapiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_client_creation() {
        assert!(HapiClient::new().is_ok());
    }
}
