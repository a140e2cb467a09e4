//! Command-line argument parsing for the HAPI client
//!
//! This module defines the CLI structure using clap derive macros: server
//! discovery, catalog browsing, and bounded data retrieval commands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// HAPI Client - browse heliophysics time-series datasets
#[derive(Parser, Debug)]
#[command(
    name = "hapi_client",
    version,
    about = "Browse and sample datasets from HAPI (Heliophysics Application Programmer's Interface) servers",
    long_about = "A client for the HAPI protocol: discover servers from the global directory,
browse dataset catalogs enriched with time ranges, and retrieve bounded CSV data samples."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known HAPI servers from the global directory
    Servers,

    /// List a server's datasets, enriched with time ranges
    Catalog(CatalogArgs),

    /// Show metadata for one dataset
    Info(DatasetArgs),

    /// Fetch a bounded preview (up to 14 days from the dataset start)
    Preview(DatasetArgs),

    /// Fetch a sample of the dataset's full range (capped at 1000 records)
    Data(DatasetArgs),
}

/// Arguments for the catalog command
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Server base URL (e.g., "https://cdaweb.gsfc.nasa.gov/hapi")
    #[arg(value_name = "SERVER_URL")]
    pub server: String,

    /// Maximum number of datasets to display
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for commands addressing one dataset
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Server base URL
    #[arg(value_name = "SERVER_URL")]
    pub server: String,

    /// Dataset identifier within the server's catalog
    #[arg(value_name = "DATASET_ID")]
    pub dataset: String,

    /// Maximum number of rows to display
    #[arg(short, long, default_value = "20")]
    pub rows: usize,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
