//! Preset endpoints
//!
//! - GET    /api/presets
//! - POST   /api/presets
//! - GET    /api/presets/:id
//! - PUT    /api/presets/:id
//! - DELETE /api/presets/:id

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use rsynth_common::db::{Preset, PresetRequest};
use tracing::info;

use super::extract::{ApiJson, ApiPath};
use super::types::{CreatedResponse, MessageResponse};
use crate::{db, ApiError, ApiResult, AppState};

const NOT_FOUND: &str = "Preset not found";

/// GET /api/presets
pub async fn list_presets(State(state): State<AppState>) -> ApiResult<Json<Vec<Preset>>> {
    let presets = db::presets::list_presets(&state.db).await?;
    Ok(Json(presets))
}

/// GET /api/presets/:id
pub async fn get_preset(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Preset>> {
    db::presets::get_preset(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
}

/// POST /api/presets
///
/// Omitted synthesis parameters take the column defaults.
pub async fn create_preset(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PresetRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let id = db::presets::create_preset(&state.db, &payload).await?;
    info!("Created preset {} '{}'", id, payload.name);

    Ok(Json(CreatedResponse::new(id, "Preset created successfully")))
}

/// PUT /api/presets/:id
///
/// Full overwrite; fields missing from the body reset to defaults.
pub async fn update_preset(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<PresetRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if !db::presets::update_preset(&state.db, id, &payload).await? {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }
    info!("Updated preset {}", id);

    Ok(Json(MessageResponse::new("Preset updated successfully")))
}

/// DELETE /api/presets/:id
pub async fn delete_preset(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !db::presets::delete_preset(&state.db, id).await? {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }
    info!("Deleted preset {}", id);

    Ok(Json(MessageResponse::new("Preset deleted successfully")))
}

/// Build preset routes
pub fn preset_routes() -> Router<AppState> {
    Router::new()
        .route("/api/presets", get(list_presets).post(create_preset))
        .route(
            "/api/presets/:id",
            get(get_preset).put(update_preset).delete(delete_preset),
        )
}
