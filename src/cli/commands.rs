//! Command handlers for the HAPI client CLI
//!
//! Each handler builds a session from the loaded configuration, performs
//! one operation, and prints a plain-text rendering of the result. Data
//! failures are scoped to the one request that caused them; nothing here
//! retries.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::app::{DataResponse, HapiSession};
use crate::cli::{CatalogArgs, DatasetArgs, GlobalArgs};
use crate::config::AppConfig;
use crate::errors::Result;

/// Handle the servers command
pub async fn handle_servers(global: &GlobalArgs) -> Result<()> {
    let session = build_session(global).await?;
    let servers = session.servers().await;

    println!("{} known HAPI servers:", servers.len());
    println!();
    for server in &servers {
        println!("  {:<14} {:<24} {}", server.id, server.name, server.url);
    }

    Ok(())
}

/// Handle the catalog command
pub async fn handle_catalog(global: &GlobalArgs, args: &CatalogArgs) -> Result<()> {
    let session = build_session(global).await?;

    let spinner = enrichment_spinner(&args.server);
    let result = session.catalog(&args.server).await;
    spinner.finish_and_clear();

    let datasets = result?;
    info!("catalog fetch returned {} datasets", datasets.len());

    let shown = args.limit.unwrap_or(datasets.len());
    println!("{} datasets on {}:", datasets.len(), args.server);
    println!();
    for dataset in datasets.iter().take(shown) {
        let range = match (&dataset.start_date, &dataset.stop_date) {
            (Some(start), Some(stop)) => format!("{} .. {}", start, stop),
            (Some(start), None) => format!("{} ..", start),
            _ => "(time range unavailable)".to_string(),
        };
        println!(
            "  {:<40} {:<32} {}",
            dataset.id,
            dataset.title.as_deref().unwrap_or("-"),
            range
        );
    }
    if shown < datasets.len() {
        println!("  ... and {} more", datasets.len() - shown);
    }

    Ok(())
}

/// Handle the info command
pub async fn handle_info(global: &GlobalArgs, args: &DatasetArgs) -> Result<()> {
    let session = build_session(global).await?;
    let info = session.info(&args.server, &args.dataset).await?;

    println!("Dataset {} on {}", args.dataset, args.server);
    if let Some(description) = &info.description {
        println!("  {}", description);
    }
    println!(
        "  Range: {} .. {}",
        info.start_date.as_deref().unwrap_or("?"),
        info.stop_date.as_deref().unwrap_or("?")
    );
    println!("  Parameters ({}):", info.parameters.len());
    for parameter in &info.parameters {
        println!(
            "    {:<24} {:<10} {}",
            parameter.name,
            parameter.data_type,
            parameter.units.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

/// Handle the preview command
pub async fn handle_preview(global: &GlobalArgs, args: &DatasetArgs) -> Result<()> {
    let session = build_session(global).await?;
    let response = session.preview(&args.server, &args.dataset).await?;
    print_data(&args.dataset, &response, args.rows);
    Ok(())
}

/// Handle the data command
pub async fn handle_data(global: &GlobalArgs, args: &DatasetArgs) -> Result<()> {
    let session = build_session(global).await?;
    let response = session.data(&args.server, &args.dataset).await?;
    print_data(&args.dataset, &response, args.rows);
    Ok(())
}

/// Build a session from the loaded application configuration
async fn build_session(global: &GlobalArgs) -> Result<HapiSession> {
    let config = AppConfig::load(global.config.clone()).await?;
    HapiSession::from_app_config(&config)
}

/// Spinner shown while the catalog fan-out is in flight
fn enrichment_spinner(server_url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching catalog from {}...", server_url));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Print a data response as an aligned plain-text table
fn print_data(dataset_id: &str, response: &DataResponse, max_rows: usize) {
    println!(
        "Dataset {}: {} rows, range {} .. {}",
        dataset_id,
        response.rows.len(),
        response.start_date,
        response.stop_date
    );
    println!();

    let header: Vec<&str> = response
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    println!("  {}", header.join(" | "));

    for row in response.rows.iter().take(max_rows) {
        println!("  {}", row.join(" | "));
    }
    if response.rows.len() > max_rows {
        println!("  ... and {} more rows", response.rows.len() - max_rows);
    }
}
