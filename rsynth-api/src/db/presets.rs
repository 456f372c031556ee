//! Preset queries

use rsynth_common::db::{Preset, PresetRequest};
use rsynth_common::Result;
use sqlx::SqlitePool;

/// All presets, newest first
pub async fn list_presets(pool: &SqlitePool) -> Result<Vec<Preset>> {
    let presets = sqlx::query_as::<_, Preset>(
        "SELECT * FROM presets ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(presets)
}

/// One preset by id
pub async fn get_preset(pool: &SqlitePool, id: i64) -> Result<Option<Preset>> {
    let preset = sqlx::query_as::<_, Preset>("SELECT * FROM presets WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(preset)
}

/// Insert a preset and return its id
///
/// A duplicate name surfaces as `Error::Conflict`.
pub async fn create_preset(pool: &SqlitePool, preset: &PresetRequest) -> Result<i64> {
    let query = sqlx::query(
        r#"
        INSERT INTO presets (
            name, description, frequency, waveform, cutoff, resonance,
            attack, decay, sustain, release, volume, reverb, delay, chorus,
            pitch_bend, modulation
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&preset.name)
    .bind(&preset.description);

    let result = preset.params.bind_all(query).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of a preset
///
/// Returns `false` when no preset has this id.
pub async fn update_preset(pool: &SqlitePool, id: i64, preset: &PresetRequest) -> Result<bool> {
    let query = sqlx::query(
        r#"
        UPDATE presets SET
            name = ?, description = ?, frequency = ?, waveform = ?, cutoff = ?, resonance = ?,
            attack = ?, decay = ?, sustain = ?, release = ?, volume = ?, reverb = ?, delay = ?,
            chorus = ?, pitch_bend = ?, modulation = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&preset.name)
    .bind(&preset.description);

    let result = preset
        .params
        .bind_all(query)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a preset; returns `false` when no preset has this id
pub async fn delete_preset(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM presets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
