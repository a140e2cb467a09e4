//! Command-line interface components
//!
//! This module contains CLI-specific code for the HAPI client binary:
//! argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{CatalogArgs, Cli, Commands, DatasetArgs, GlobalArgs};
pub use commands::{handle_catalog, handle_data, handle_info, handle_preview, handle_servers};
