//! Catalog retrieval and enrichment
//!
//! The `/catalog` listing only carries dataset ids and sometimes titles.
//! To be useful for browsing, every entry is enriched with its time range
//! and description from `/info`. The failure domains are deliberately
//! asymmetric: losing the catalog call fails the whole operation (there is
//! nothing to enrich), while a single dataset's bad metadata is logged and
//! swallowed so it cannot hide the rest of the server's listing.

use std::sync::Arc;

use futures::future;
use tracing::{info, warn};

use crate::app::client::HapiClient;
use crate::app::info::HapiInfoClient;
use crate::app::models::{CatalogResponse, Dataset, DatasetInfo};
use crate::constants::hapi;
use crate::errors::HapiResult;

/// Client for a HAPI server's `/catalog` endpoint with info enrichment
#[derive(Debug, Clone)]
pub struct HapiCatalogClient {
    client: Arc<HapiClient>,
    info: HapiInfoClient,
}

impl HapiCatalogClient {
    /// Create a catalog client sharing the given HTTP handle
    pub fn new(client: Arc<HapiClient>) -> Self {
        Self {
            info: HapiInfoClient::new(Arc::clone(&client)),
            client,
        }
    }

    /// Fetch and enrich a server's dataset catalog
    ///
    /// Output preserves catalog order. Enrichment issues one info request
    /// per entry and joins them all; results are matched back to their
    /// entries by index, never by completion order. There is no concurrency
    /// cap, so a catalog with hundreds of datasets fans out that many
    /// requests at once.
    ///
    /// # Errors
    ///
    /// `HapiError::Transport`/`HapiError::Status` when the catalog call
    /// itself fails. Per-dataset enrichment failures are logged at warn and
    /// absorbed; the affected dataset keeps its catalog-stub fields.
    pub async fn fetch_catalog(&self, server_url: &str) -> HapiResult<Vec<Dataset>> {
        let url = HapiClient::endpoint_url(server_url, hapi::CATALOG_ENDPOINT, &[])?;

        let response: CatalogResponse = self.client.handler().get_json(&url).await?;
        response.status.ensure_ok()?;

        let mut datasets = response.catalog;
        info!("catalog for {} lists {} datasets", server_url, datasets.len());

        let enrichments = future::join_all(
            datasets
                .iter()
                .map(|dataset| self.info.fetch_info(server_url, &dataset.id)),
        )
        .await;

        apply_enrichments(&mut datasets, enrichments);

        Ok(datasets)
    }
}

/// Merge enrichment results back into their catalog entries by index
///
/// A failed enrichment is logged at warn and leaves its entry's stub
/// fields untouched; neighboring entries are unaffected.
fn apply_enrichments(datasets: &mut [Dataset], enrichments: Vec<HapiResult<DatasetInfo>>) {
    for (dataset, enrichment) in datasets.iter_mut().zip(enrichments) {
        match enrichment {
            Ok(info) => dataset.merge_info(&info),
            Err(e) => warn!("info enrichment failed for {}: {}", dataset.id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HapiError;

    fn stub(id: &str, title: &str) -> Dataset {
        Dataset {
            id: id.to_string(),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn enrichment(start: &str, stop: &str, description: &str) -> DatasetInfo {
        DatasetInfo {
            start_date: Some(start.to_string()),
            stop_date: Some(stop.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_failed_enrichment_keeps_stub_without_affecting_neighbors() {
        let mut datasets = vec![stub("A", "first"), stub("B", "second"), stub("C", "third")];

        let enrichments = vec![
            Ok(enrichment(
                "2020-01-01T00:00:00Z",
                "2021-01-01T00:00:00Z",
                "enriched A",
            )),
            Err(HapiError::Status {
                code: 1406,
                message: "unknown dataset id".to_string(),
            }),
            Ok(enrichment(
                "2010-01-01T00:00:00Z",
                "2011-01-01T00:00:00Z",
                "enriched C",
            )),
        ];

        apply_enrichments(&mut datasets, enrichments);

        // Catalog order is preserved; matching is by index, never by id
        assert_eq!(datasets[0].id, "A");
        assert_eq!(datasets[1].id, "B");
        assert_eq!(datasets[2].id, "C");

        // Successful neighbors are enriched
        assert_eq!(datasets[0].description.as_deref(), Some("enriched A"));
        assert_eq!(
            datasets[0].start_date.as_deref(),
            Some("2020-01-01T00:00:00Z")
        );
        assert_eq!(datasets[2].description.as_deref(), Some("enriched C"));

        // The failed entry keeps all its stub fields and gains nothing
        assert_eq!(datasets[1].title.as_deref(), Some("second"));
        assert!(datasets[1].description.is_none());
        assert!(datasets[1].start_date.is_none());
        assert!(datasets[1].stop_date.is_none());
    }

    #[test]
    fn test_all_enrichments_failed_returns_stubs() {
        let mut datasets = vec![stub("A", "first"), stub("B", "second")];

        let enrichments: Vec<HapiResult<DatasetInfo>> = vec![
            Err(HapiError::Status {
                code: 1500,
                message: "server error".to_string(),
            }),
            Err(HapiError::Status {
                code: 1500,
                message: "server error".to_string(),
            }),
        ];

        apply_enrichments(&mut datasets, enrichments);

        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].title.as_deref(), Some("first"));
        assert_eq!(datasets[1].title.as_deref(), Some("second"));
        assert!(datasets.iter().all(|d| d.start_date.is_none()));
    }
}
