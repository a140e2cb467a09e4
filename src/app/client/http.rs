//! Core HTTP operations for HAPI requests
//!
//! Thin wrapper over the shared `reqwest::Client` that maps transport
//! failures into the crate's error taxonomy. A non-2xx HTTP status is a
//! transport failure at this layer; the HAPI status code embedded in 2xx
//! bodies is checked by the callers that understand the response shape.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::HapiResult;

/// HTTP operations handler shared by all HAPI clients
#[derive(Debug)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new handler around an already-built client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a URL and returns the response body as text
    ///
    /// # Errors
    ///
    /// Returns `HapiError::Transport` on connection failure or a non-2xx
    /// HTTP status.
    pub async fn get_text(&self, url: &Url) -> HapiResult<String> {
        let response = self.client.get(url.as_str()).send().await?.error_for_status()?;
        let text = response.text().await?;
        tracing::debug!("fetched {} ({} bytes)", url, text.len());
        Ok(text)
    }

    /// Fetches a URL and deserializes the JSON response body
    ///
    /// # Errors
    ///
    /// Returns `HapiError::Transport` on request failure and
    /// `HapiError::Json` when the body does not match the expected shape.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> HapiResult<T> {
        let text = self.get_text(url).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get a reference to the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
