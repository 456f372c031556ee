//! User settings queries
//!
//! One row per `user_id`; writes are upserts keyed on that column.

use rsynth_common::db::{SettingsRequest, UserSettings};
use rsynth_common::Result;
use sqlx::SqlitePool;

/// Settings row for a user
pub async fn get_settings(pool: &SqlitePool, user_id: &str) -> Result<Option<UserSettings>> {
    let settings =
        sqlx::query_as::<_, UserSettings>("SELECT * FROM user_settings WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(settings)
}

/// Insert or overwrite the settings row for a user
///
/// An existing row keeps its id and created_at.
pub async fn upsert_settings(
    pool: &SqlitePool,
    user_id: &str,
    settings: &SettingsRequest,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_settings (
            user_id, theme, keyboard_layout, audio_latency, sample_rate, master_volume, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(user_id) DO UPDATE SET
            theme = excluded.theme,
            keyboard_layout = excluded.keyboard_layout,
            audio_latency = excluded.audio_latency,
            sample_rate = excluded.sample_rate,
            master_volume = excluded.master_volume,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(user_id)
    .bind(&settings.theme)
    .bind(&settings.keyboard_layout)
    .bind(settings.audio_latency)
    .bind(settings.sample_rate)
    .bind(settings.master_volume)
    .execute(pool)
    .await?;

    Ok(())
}
