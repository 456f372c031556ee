//! rsynth-api library - RetroSynth REST service
//!
//! Presets, user settings, performance logs and compositions over JSON,
//! backed by a single SQLite database. The browser client's static assets
//! are served from a configurable directory.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod api;
pub mod cli;
pub mod db;
pub mod error;
pub mod export;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed after shutdown
    pub db: SqlitePool,
    /// Directory served for every non-API path
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            static_dir: static_dir.into(),
        }
    }
}

/// Build application router
///
/// API routes live under `/api`, `/health` is the liveness check, and any
/// other path falls through to the static asset directory.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .merge(api::preset_routes())
        .merge(api::settings_routes())
        .merge(api::log_routes())
        .merge(api::composition_routes())
        .merge(api::health_routes())
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Permissive CORS: the client may be opened from another origin
        .layer(CorsLayer::permissive())
}
