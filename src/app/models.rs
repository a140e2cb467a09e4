//! Data models for the HAPI client
//!
//! This module defines the core data structures used throughout the crate:
//! server directory entries, catalog datasets, per-dataset metadata, and
//! parsed data responses. All values are immutable snapshots returned by
//! value to callers; none retains a reference into caller state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::hapi;
use crate::errors::{HapiError, HapiResult};

/// One entry in the global HAPI server directory
///
/// Identity is `id`. Produced only by the server registry; immutable once
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Base URL of the server's HAPI endpoint tree
    pub url: String,
    /// Human-readable server name
    pub name: String,
    /// Short identifier, unique within the directory
    pub id: String,
    /// Contact person or institution
    pub contact: String,
    /// Contact email address
    pub email: String,
}

/// The status object HAPI embeds in every JSON response
///
/// A code of 1200 means success regardless of the HTTP status; any other
/// code is an application-level failure carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HapiStatus {
    /// Numeric HAPI status code (1200 = OK)
    pub code: u32,
    /// Human-readable status message
    pub message: String,
}

impl HapiStatus {
    /// Whether this status reports success
    pub fn is_ok(&self) -> bool {
        self.code == hapi::STATUS_OK
    }

    /// Convert a non-1200 status into the corresponding error
    pub fn ensure_ok(&self) -> HapiResult<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(HapiError::Status {
                code: self.code,
                message: self.message.clone(),
            })
        }
    }
}

/// One named column in a dataset's data table
///
/// Parameters form an ordered sequence; index 0 is always the time axis.
/// That is a HAPI protocol invariant, not a local design choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Column name
    pub name: String,
    /// HAPI value type (e.g., "isotime", "double", "integer", "string")
    #[serde(rename = "type")]
    pub data_type: String,
    /// Physical units, when advertised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Fill value marking missing data, as advertised by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Free-text column description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One dataset in a server's catalog
///
/// Identity is `id`, unique within one server's catalog. A catalog stub
/// carries `id` and sometimes `title`; the remaining fields are filled in
/// by merging an info-enrichment result via [`Dataset::merge_info`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dataset {
    /// Dataset identifier
    pub id: String,
    /// Short human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact for the dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// First available timestamp (ISO-8601), when known
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last available timestamp (ISO-8601), when known
    #[serde(default, rename = "stopDate", skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<String>,
}

impl Dataset {
    /// Merge an info-enrichment result into this catalog stub
    ///
    /// Last-write-wins on overlapping fields: a field present in the
    /// enrichment overrides the stub value, a field absent from the
    /// enrichment leaves the stub value in place.
    pub fn merge_info(&mut self, info: &DatasetInfo) {
        if info.description.is_some() {
            self.description = info.description.clone();
        }
        if info.start_date.is_some() {
            self.start_date = info.start_date.clone();
        }
        if info.stop_date.is_some() {
            self.stop_date = info.stop_date.clone();
        }
    }
}

/// Per-dataset metadata from the `/info` endpoint
///
/// Servers attach loosely-typed fields beyond the known schema (cadence,
/// resource URLs, custom annotations); those land in `extra` rather than
/// widening the typed fields into an open-ended dynamic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DatasetInfo {
    /// First available timestamp (ISO-8601), when advertised
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last available timestamp (ISO-8601), when advertised
    #[serde(default, rename = "stopDate", skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<String>,
    /// Free-text dataset description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered parameter schema; index 0 is the time axis
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Unrecognized response fields, preserved as-is
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Parsed `/data` response combined with parameter metadata from `/info`
///
/// Rows are ordered sequences of strings; no numeric coercion happens at
/// this layer. In the well-formed case every row's length equals
/// `parameters.len()` and `row[0]` is the ISO-8601 time-axis value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse {
    /// Start of the dataset's advertised range (falls back to the
    /// requested window when the server omits it)
    pub start_date: String,
    /// End of the dataset's advertised range (same fallback)
    pub stop_date: String,
    /// Ordered parameter schema describing the row columns
    pub parameters: Vec<Parameter>,
    /// Data rows, in server order
    pub rows: Vec<Vec<String>>,
}

impl DataResponse {
    /// The time-axis parameter (always the first one, per the protocol)
    pub fn time_parameter(&self) -> Option<&Parameter> {
        self.parameters.first()
    }

    /// Iterate over the time-axis values of all rows
    pub fn time_values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(|row| row.first().map(String::as_str))
    }
}

/// Raw `/catalog` response body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogResponse {
    /// HAPI protocol version string
    #[serde(rename = "HAPI")]
    #[allow(dead_code)]
    pub hapi: String,
    /// Embedded status object
    pub status: HapiStatus,
    /// Dataset stubs, in directory order
    #[serde(default)]
    pub catalog: Vec<Dataset>,
}

/// Raw `/info` response body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InfoResponse {
    /// HAPI protocol version string
    #[serde(rename = "HAPI")]
    #[allow(dead_code)]
    pub hapi: String,
    /// Embedded status object
    pub status: HapiStatus,
    /// First available timestamp
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    /// Last available timestamp
    #[serde(default, rename = "stopDate")]
    pub stop_date: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered parameter schema
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Unrecognized response fields
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl InfoResponse {
    /// Extract the dataset metadata, discarding the protocol envelope
    pub fn into_info(self) -> DatasetInfo {
        DatasetInfo {
            start_date: self.start_date,
            stop_date: self.stop_date,
            description: self.description,
            parameters: self.parameters,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_ok() {
        let ok = HapiStatus {
            code: 1200,
            message: "OK".to_string(),
        };
        assert!(ok.is_ok());
        assert!(ok.ensure_ok().is_ok());

        let err = HapiStatus {
            code: 1406,
            message: "unknown dataset id".to_string(),
        };
        assert!(!err.is_ok());
        let result = err.ensure_ok();
        assert!(matches!(
            result,
            Err(HapiError::Status { code: 1406, .. })
        ));
    }

    #[test]
    fn test_catalog_response_parsing() {
        let body = r#"{
            "HAPI": "3.0",
            "status": { "code": 1200, "message": "OK" },
            "catalog": [
                { "id": "AC_H0_MFI", "title": "ACE magnetic field" },
                { "id": "AC_H1_MFI" }
            ]
        }"#;

        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        assert!(response.status.is_ok());
        assert_eq!(response.catalog.len(), 2);
        assert_eq!(response.catalog[0].id, "AC_H0_MFI");
        assert_eq!(
            response.catalog[0].title.as_deref(),
            Some("ACE magnetic field")
        );
        assert!(response.catalog[1].title.is_none());
    }

    #[test]
    fn test_catalog_response_missing_catalog_field() {
        // Some servers omit the catalog array on error responses
        let body = r#"{ "HAPI": "3.0", "status": { "code": 1500, "message": "server error" } }"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        assert!(response.catalog.is_empty());
        assert!(response.status.ensure_ok().is_err());
    }

    #[test]
    fn test_info_response_parsing_with_extra_fields() {
        let body = r#"{
            "HAPI": "3.0",
            "status": { "code": 1200, "message": "OK" },
            "startDate": "1997-09-02T00:00:12Z",
            "stopDate": "2024-01-01T00:00:00Z",
            "description": "Magnetic field 16s averages",
            "cadence": "PT16S",
            "resourceURL": "https://cdaweb.gsfc.nasa.gov/",
            "parameters": [
                { "name": "Time", "type": "isotime", "units": "UTC" },
                { "name": "Magnitude", "type": "double", "units": "nT", "fill": "-1.0E31" }
            ]
        }"#;

        let info = serde_json::from_str::<InfoResponse>(body).unwrap().into_info();
        assert_eq!(info.start_date.as_deref(), Some("1997-09-02T00:00:12Z"));
        assert_eq!(info.parameters.len(), 2);
        assert_eq!(info.parameters[0].data_type, "isotime");
        assert_eq!(info.parameters[1].fill.as_deref(), Some("-1.0E31"));

        // Unknown fields land in the side channel, not the typed schema
        assert_eq!(
            info.extra.get("cadence"),
            Some(&Value::String("PT16S".to_string()))
        );
        assert!(info.extra.contains_key("resourceURL"));
        // The protocol envelope is consumed, not preserved
        assert!(!info.extra.contains_key("HAPI"));
        assert!(!info.extra.contains_key("status"));
    }

    #[test]
    fn test_dataset_merge_info_enrichment_wins() {
        let mut dataset = Dataset {
            id: "DS1".to_string(),
            title: Some("stub title".to_string()),
            description: Some("stub description".to_string()),
            ..Default::default()
        };

        let info = DatasetInfo {
            start_date: Some("2020-01-01T00:00:00Z".to_string()),
            stop_date: Some("2021-01-01T00:00:00Z".to_string()),
            description: Some("enriched description".to_string()),
            ..Default::default()
        };

        dataset.merge_info(&info);

        assert_eq!(dataset.description.as_deref(), Some("enriched description"));
        assert_eq!(dataset.start_date.as_deref(), Some("2020-01-01T00:00:00Z"));
        assert_eq!(dataset.stop_date.as_deref(), Some("2021-01-01T00:00:00Z"));
        // Fields the enrichment does not carry survive from the stub
        assert_eq!(dataset.title.as_deref(), Some("stub title"));
    }

    #[test]
    fn test_dataset_merge_info_absent_fields_keep_stub() {
        let mut dataset = Dataset {
            id: "DS2".to_string(),
            description: Some("stub description".to_string()),
            start_date: Some("1999-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };

        dataset.merge_info(&DatasetInfo::default());

        assert_eq!(dataset.description.as_deref(), Some("stub description"));
        assert_eq!(dataset.start_date.as_deref(), Some("1999-01-01T00:00:00Z"));
    }

    #[test]
    fn test_data_response_time_accessors() {
        let response = DataResponse {
            start_date: "2020-01-01T00:00:00Z".to_string(),
            stop_date: "2020-01-15T00:00:00Z".to_string(),
            parameters: vec![
                Parameter {
                    name: "Time".to_string(),
                    data_type: "isotime".to_string(),
                    units: Some("UTC".to_string()),
                    fill: None,
                    description: None,
                },
                Parameter {
                    name: "Bz".to_string(),
                    data_type: "double".to_string(),
                    units: Some("nT".to_string()),
                    fill: None,
                    description: None,
                },
            ],
            rows: vec![
                vec!["2020-01-01T00:00:00Z".to_string(), "1.5".to_string()],
                vec!["2020-01-01T00:01:00Z".to_string(), "1.7".to_string()],
            ],
        };

        assert_eq!(response.time_parameter().unwrap().name, "Time");
        let times: Vec<&str> = response.time_values().collect();
        assert_eq!(times, vec!["2020-01-01T00:00:00Z", "2020-01-01T00:01:00Z"]);
    }
}
