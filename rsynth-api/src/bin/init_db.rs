//! rsynth-init - one-time database initializer
//!
//! Creates the schema and seeds the factory presets plus the `default`
//! settings row. Safe to run repeatedly.

use anyhow::{Context, Result};
use clap::Parser;
use rsynth_api::cli::{init_tracing, ConfigArgs};
use rsynth_common::db::{init_database_with_report, DEFAULT_PRESETS};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "rsynth-init")]
#[command(about = "Create the RetroSynth database schema and seed default presets")]
#[command(version)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_warning) = args
        .config
        .resolve()
        .context("Failed to resolve configuration")?;

    init_tracing(&config.log_level);
    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }
    info!("Initializing SQLite database: {}", config.database_path.display());

    let (pool, report) = init_database_with_report(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    info!(
        "Database initialized ({} presets and {} settings rows inserted)",
        report.presets_inserted, report.settings_inserted
    );
    info!("Default presets:");
    for preset in DEFAULT_PRESETS.iter() {
        info!("- {}: {}", preset.name, preset.description);
    }

    pool.close().await;
    info!("Database connection closed");

    Ok(())
}
