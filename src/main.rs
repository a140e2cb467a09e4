//! HAPI client CLI application
//!
//! Command-line interface for browsing HAPI servers and sampling their
//! time-series datasets.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hapi_client::cli::{
    handle_catalog, handle_data, handle_info, handle_preview, handle_servers, Cli, Commands,
};
use hapi_client::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(&cli);

    info!("HAPI client v{} starting", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Servers => handle_servers(&cli.global).await,
        Commands::Catalog(args) => handle_catalog(&cli.global, args).await,
        Commands::Info(args) => handle_info(&cli.global, args).await,
        Commands::Preview(args) => handle_preview(&cli.global, args).await,
        Commands::Data(args) => handle_data(&cli.global, args).await,
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("hapi_client={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
