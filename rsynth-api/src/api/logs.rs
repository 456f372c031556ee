//! Performance log and statistics endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rsynth_common::db::{LogRequest, WaveformStats};
use tracing::debug;

use super::extract::ApiJson;
use super::types::CreatedResponse;
use crate::{db, ApiResult, AppState};

/// POST /api/logs
pub async fn create_log(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LogRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db::logs::insert_log(&state.db, &payload).await?;
    debug!(
        "Logged note {:?} for session {:?}",
        payload.note_played, payload.session_id
    );

    Ok(Json(CreatedResponse::new(id, "Performance logged successfully")))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<Vec<WaveformStats>>> {
    let stats = db::logs::waveform_stats(&state.db).await?;
    Ok(Json(stats))
}

/// Build log and stats routes
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/api/logs", post(create_log))
        .route("/api/stats", get(get_stats))
}
