//! RetroSynth API server (rsynth-api) - Main entry point
//!
//! Serves the preset/settings/log/composition REST API and the browser
//! client assets. On Ctrl+C or SIGTERM it stops accepting requests, exports
//! the performance log table to CSV and closes the database.

use anyhow::{Context, Result};
use clap::Parser;
use rsynth_api::cli::{init_tracing, ConfigArgs};
use rsynth_api::{build_router, export, AppState};
use rsynth_common::db::init_database;
use tokio::signal;
use tracing::{error, info, warn};

/// Command-line arguments for rsynth-api
#[derive(Parser, Debug)]
#[command(name = "rsynth-api")]
#[command(about = "RetroSynth preset, composition and performance-log API server")]
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

    info!(
        "Starting RetroSynth API (rsynth-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database: {}", config.database_path.display());
    info!("Static assets: {}", config.static_dir.display());

    // Storage-open failure is the only fatal startup error
    let pool = init_database(&config.database_path)
        .await
        .context("Failed to open database")?;

    let state = AppState::new(pool.clone(), config.static_dir.clone());
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://localhost:{}", config.port);
    info!("API endpoints available at /api/*");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    match export::export_performance_logs(&pool, &config.export_path).await {
        Ok(0) => info!("No performance logs to export"),
        Ok(count) => info!(
            "Exported {} performance logs to {}",
            count,
            config.export_path.display()
        ),
        Err(e) => error!("Error exporting performance_logs: {}", e),
    }

    pool.close().await;
    info!("Database connection closed");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
