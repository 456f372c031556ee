//! Performance log queries
//!
//! The table is append-only; the only reads are the per-waveform aggregate
//! and the shutdown export.

use rsynth_common::db::{LogRequest, WaveformStats};
use rsynth_common::Result;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Append one performance record and return its id
pub async fn insert_log(pool: &SqlitePool, log: &LogRequest) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO performance_logs (
            session_id, note_played, frequency, duration, waveform, effects_used
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&log.session_id)
    .bind(&log.note_played)
    .bind(log.frequency)
    .bind(log.duration)
    .bind(log.waveform)
    .bind(log.effects_used.as_ref().map(Json))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Aggregate logs per waveform, busiest waveform first
pub async fn waveform_stats(pool: &SqlitePool) -> Result<Vec<WaveformStats>> {
    let stats = sqlx::query_as::<_, WaveformStats>(
        r#"
        SELECT
            waveform,
            COUNT(*) AS total_notes,
            AVG(duration) AS avg_duration,
            COUNT(DISTINCT session_id) AS total_sessions,
            COUNT(DISTINCT note_played) AS unique_notes
        FROM performance_logs
        GROUP BY waveform
        ORDER BY total_notes DESC, waveform ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(stats)
}
