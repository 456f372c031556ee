//! Composition endpoints
//!
//! Compositions can be created, listed and fetched; there is no update or
//! delete.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use rsynth_common::db::{Composition, CompositionRequest};
use tracing::info;

use super::extract::{ApiJson, ApiPath};
use super::types::CreatedResponse;
use crate::{db, ApiError, ApiResult, AppState};

/// POST /api/compositions
pub async fn create_composition(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CompositionRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db::compositions::create_composition(&state.db, &payload).await?;
    info!(
        "Saved composition {} '{}' ({} notes)",
        id,
        payload.name,
        payload.notes_data.len()
    );

    Ok(Json(CreatedResponse::new(id, "Composition saved successfully")))
}

/// GET /api/compositions
pub async fn list_compositions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Composition>>> {
    let compositions = db::compositions::list_compositions(&state.db).await?;
    Ok(Json(compositions))
}

/// GET /api/compositions/:id
pub async fn get_composition(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Composition>> {
    db::compositions::get_composition(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Composition not found".to_string()))
}

/// Build composition routes
pub fn composition_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/compositions",
            get(list_compositions).post(create_composition),
        )
        .route("/api/compositions/:id", get(get_composition))
}
