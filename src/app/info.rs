//! Per-dataset metadata and data retrieval
//!
//! `HapiInfoClient` speaks to the `/info` and `/data` endpoints for one
//! dataset at a time. It performs no caching; staleness handling is layered
//! on top by the session. A data fetch internally re-issues the info call
//! to recover the parameter schema, since the CSV body carries no column
//! names of its own.

use std::sync::Arc;

use tracing::debug;

use crate::app::client::HapiClient;
use crate::app::models::{DataResponse, DatasetInfo, InfoResponse};
use crate::app::records::parse_records;
use crate::app::window::TimeWindow;
use crate::constants::hapi;
use crate::errors::HapiResult;

/// Client for a HAPI server's `/info` and `/data` endpoints
#[derive(Debug, Clone)]
pub struct HapiInfoClient {
    client: Arc<HapiClient>,
}

impl HapiInfoClient {
    /// Create an info client sharing the given HTTP handle
    pub fn new(client: Arc<HapiClient>) -> Self {
        Self { client }
    }

    /// Fetch per-dataset metadata from `{server}/info?id={dataset_id}`
    ///
    /// # Errors
    ///
    /// `HapiError::Status` when the embedded status code is not 1200,
    /// `HapiError::Transport` on non-2xx HTTP or network failure.
    pub async fn fetch_info(&self, server_url: &str, dataset_id: &str) -> HapiResult<DatasetInfo> {
        let url = HapiClient::endpoint_url(server_url, hapi::INFO_ENDPOINT, &[("id", dataset_id)])?;

        let response: InfoResponse = self.client.handler().get_json(&url).await?;
        response.status.ensure_ok()?;

        let info = response.into_info();
        debug!(
            "info for {} on {}: {} parameters, range {:?}..{:?}",
            dataset_id,
            server_url,
            info.parameters.len(),
            info.start_date,
            info.stop_date
        );
        Ok(info)
    }

    /// Fetch data for the given window from `{server}/data`
    ///
    /// The caller must have resolved `window` beforehand (see the window
    /// policy functions); HAPI rejects unbounded data requests. The info
    /// call is repeated here to recover the parameter schema for the rows.
    ///
    /// # Errors
    ///
    /// `HapiError::Transport` on request failure, `HapiError::Status` on a
    /// non-1200 status in the embedded info call.
    pub async fn fetch_data(
        &self,
        server_url: &str,
        dataset_id: &str,
        window: &TimeWindow,
        max_records: Option<usize>,
    ) -> HapiResult<DataResponse> {
        let info = self.fetch_info(server_url, dataset_id).await?;

        let url = HapiClient::endpoint_url(
            server_url,
            hapi::DATA_ENDPOINT,
            &[
                ("id", dataset_id),
                ("time.min", &window.time_min),
                ("time.max", &window.time_max),
            ],
        )?;

        let body = self.client.handler().get_text(&url).await?;
        let rows = parse_records(&body, max_records);
        debug!(
            "data for {} on {}: {} rows in [{}, {})",
            dataset_id,
            server_url,
            rows.len(),
            window.time_min,
            window.time_max
        );

        Ok(DataResponse {
            start_date: info
                .start_date
                .clone()
                .unwrap_or_else(|| window.time_min.clone()),
            stop_date: info
                .stop_date
                .clone()
                .unwrap_or_else(|| window.time_max.clone()),
            parameters: info.parameters,
            rows,
        })
    }
}
