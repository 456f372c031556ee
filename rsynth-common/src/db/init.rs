//! Database initialization
//!
//! Opens (creating if missing) the SQLite file, creates the four tables and
//! seeds defaults. Every step is idempotent, so this runs on every startup.

use crate::db::seed::{seed_defaults, SeedReport};
use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Initialize database connection, create tables and seed defaults
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let (pool, _) = init_database_with_report(db_path).await?;
    Ok(pool)
}

/// Same as [`init_database`], also reporting what the seed step inserted
pub async fn init_database_with_report(db_path: &Path) -> Result<(SqlitePool, SeedReport)> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;
    let report = seed_defaults(&pool).await?;

    Ok((pool, report))
}

/// In-memory database with the full schema (no seed data)
///
/// Uses a single connection that never expires, so every query sees the
/// same database.
pub async fn connect_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Create all tables if they do not exist
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_presets_table(pool).await?;
    create_user_settings_table(pool).await?;
    create_performance_logs_table(pool).await?;
    create_compositions_table(pool).await?;
    Ok(())
}

/// Create the presets table
///
/// Column defaults mirror `SynthParams::DEFAULT`.
pub async fn create_presets_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS presets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            frequency REAL NOT NULL DEFAULT 440,
            waveform TEXT NOT NULL DEFAULT 'sine',
            cutoff REAL NOT NULL DEFAULT 1000,
            resonance REAL NOT NULL DEFAULT 1,
            attack REAL NOT NULL DEFAULT 0.1,
            decay REAL NOT NULL DEFAULT 0.3,
            sustain REAL NOT NULL DEFAULT 0.7,
            release REAL NOT NULL DEFAULT 0.5,
            volume REAL NOT NULL DEFAULT 0.3,
            reverb REAL NOT NULL DEFAULT 0.25,
            delay REAL NOT NULL DEFAULT 0.15,
            chorus REAL NOT NULL DEFAULT 0.35,
            pitch_bend REAL NOT NULL DEFAULT 0,
            modulation REAL NOT NULL DEFAULT 0.25,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the user_settings table
pub async fn create_user_settings_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_settings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL UNIQUE,
            theme TEXT NOT NULL DEFAULT 'dark',
            keyboard_layout TEXT NOT NULL DEFAULT 'qwerty',
            audio_latency INTEGER NOT NULL DEFAULT 128,
            sample_rate INTEGER NOT NULL DEFAULT 44100,
            master_volume REAL NOT NULL DEFAULT 0.3,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the performance_logs table (append-only)
pub async fn create_performance_logs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS performance_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id TEXT,
            note_played TEXT,
            frequency REAL,
            duration REAL,
            waveform TEXT,
            effects_used TEXT,
            timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the compositions table
///
/// `notes_data` holds the JSON-encoded note sequence.
pub async fn create_compositions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS compositions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            notes_data TEXT NOT NULL DEFAULT '[]',
            tempo INTEGER NOT NULL DEFAULT 120,
            key_signature TEXT NOT NULL DEFAULT 'C',
            time_signature TEXT NOT NULL DEFAULT '4/4',
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{SettingsRequest, SynthParams, Waveform};

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = connect_memory().await.unwrap();
        create_schema(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec!["compositions", "performance_logs", "presets", "user_settings"]
        );
    }

    #[tokio::test]
    async fn test_preset_column_defaults_match_synth_params() {
        let pool = connect_memory().await.unwrap();

        sqlx::query("INSERT INTO presets (name) VALUES ('bare')")
            .execute(&pool)
            .await
            .unwrap();

        let params: SynthParams = sqlx::query_as("SELECT * FROM presets WHERE name = 'bare'")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(params, SynthParams::DEFAULT);
        assert_eq!(params.waveform, Waveform::Sine);
    }

    #[tokio::test]
    async fn test_settings_column_defaults_match_request_defaults() {
        let pool = connect_memory().await.unwrap();

        sqlx::query("INSERT INTO user_settings (user_id) VALUES ('someone')")
            .execute(&pool)
            .await
            .unwrap();

        let row: (String, String, i64, i64, f64) = sqlx::query_as(
            "SELECT theme, keyboard_layout, audio_latency, sample_rate, master_volume FROM user_settings",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        let defaults = SettingsRequest::default();
        assert_eq!(row.0, defaults.theme);
        assert_eq!(row.1, defaults.keyboard_layout);
        assert_eq!(row.2, defaults.audio_latency);
        assert_eq!(row.3, defaults.sample_rate);
        assert_eq!(row.4, defaults.master_volume);
    }

    #[tokio::test]
    async fn test_preset_parameter_columns_reject_null() {
        let pool = connect_memory().await.unwrap();

        let nullable: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM pragma_table_info('presets') WHERE \"notnull\" = 0 AND pk = 0",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(nullable, vec!["description"]);

        let result = sqlx::query("INSERT INTO presets (name, cutoff) VALUES ('nulled', NULL)")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
