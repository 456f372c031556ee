//! User settings endpoints

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use rsynth_common::db::{SettingsRequest, UserSettings};
use tracing::info;

use super::extract::{ApiJson, ApiPath};
use super::types::MessageResponse;
use crate::{db, ApiError, ApiResult, AppState};

/// GET /api/settings/:user_id
pub async fn get_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<UserSettings>> {
    db::settings::get_settings(&state.db, &user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User settings not found".to_string()))
}

/// PUT /api/settings/:user_id
///
/// Upsert: creates the row on first save, overwrites it afterwards.
pub async fn put_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiJson(payload): ApiJson<SettingsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    db::settings::upsert_settings(&state.db, &user_id, &payload).await?;
    info!("Saved settings for user '{}'", user_id);

    Ok(Json(MessageResponse::new("Settings updated successfully")))
}

/// Build settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/api/settings/:user_id", get(get_settings).put(put_settings))
}
