//! Error types for the HAPI client
//!
//! This module defines the error taxonomy for all components of the crate.
//! Each failure domain gets its own enum so callers can scope their handling:
//! protocol/transport failures, time-window precondition violations, and
//! configuration problems are distinct concerns with distinct recovery paths.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by HAPI protocol operations
///
/// HAPI multiplexes its own error taxonomy inside 2xx responses: a body can
/// report failure through an embedded status code even when the HTTP layer
/// reports success. `Status` captures that case; `Transport` covers the
/// network and non-2xx HTTP failures.
#[derive(Error, Debug)]
pub enum HapiError {
    /// HTTP request failed: connection failure or non-2xx status
    #[error("HTTP request failed")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose embedded HAPI status code is not 1200
    #[error("HAPI error {code}: {message}")]
    Status { code: u32, message: String },

    /// Response body was not valid JSON for the expected shape
    #[error("Malformed HAPI response body")]
    Json(#[from] serde_json::Error),

    /// A request URL could not be constructed from the server base URL
    #[error("Invalid HAPI URL: {url}")]
    InvalidUrl { url: String },
}

/// Precondition failures when computing a request time window
///
/// HAPI data requests require an explicit time range, so a dataset that does
/// not advertise the needed dates cannot be queried at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Dataset does not advertise a start date
    #[error("Dataset does not advertise a start date")]
    MissingStartDate,

    /// Dataset does not advertise a stop date
    #[error("Dataset does not advertise a stop date")]
    MissingStopDate,

    /// Advertised timestamp could not be parsed as ISO-8601
    #[error("Unparseable ISO-8601 timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// I/O error reading configuration
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HAPI protocol error
    #[error(transparent)]
    Hapi(#[from] HapiError),

    /// Time-window precondition error
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Hapi(HapiError::Transport(_)) => "transport",
            AppError::Hapi(HapiError::Status { .. }) => "hapi-status",
            AppError::Hapi(_) => "hapi",
            AppError::Window(_) => "window",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// HAPI protocol result type alias
pub type HapiResult<T> = std::result::Result<T, HapiError>;

/// Time-window result type alias
pub type WindowResult<T> = std::result::Result<T, WindowError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let status = HapiError::Status {
            code: 1406,
            message: "unknown dataset id".to_string(),
        };
        assert_eq!(AppError::from(status).category(), "hapi-status");
        assert_eq!(AppError::from(WindowError::MissingStartDate).category(), "window");
        assert_eq!(AppError::generic("boom").category(), "generic");
    }

    #[test]
    fn test_status_error_display() {
        let err = HapiError::Status {
            code: 1406,
            message: "unknown dataset id".to_string(),
        };
        assert_eq!(err.to_string(), "HAPI error 1406: unknown dataset id");
    }

    #[test]
    fn test_window_error_equality() {
        assert_eq!(WindowError::MissingStartDate, WindowError::MissingStartDate);
        assert_ne!(WindowError::MissingStartDate, WindowError::MissingStopDate);
    }
}
