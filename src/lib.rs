//! HAPI Client Library
//!
//! A Rust client for the HAPI (Heliophysics Application Programmer's
//! Interface) protocol: server discovery, catalog enrichment, bounded
//! time-window computation, and CSV data retrieval, resilient against
//! partial failures and inconsistent server metadata.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
