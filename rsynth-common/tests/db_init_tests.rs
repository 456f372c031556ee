//! Integration tests for on-disk database initialization
//!
//! Covers first-run creation, reopening an existing file and seed idempotence.

use rsynth_common::db::{init_database, init_database_with_report, SeedReport, DEFAULT_PRESETS};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("synth_database.db");

    let pool = init_database(&db_path).await;
    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_reopen_does_not_duplicate_seed() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("synth_database.db");

    let (pool1, first) = init_database_with_report(&db_path).await.unwrap();
    assert_eq!(first.presets_inserted, DEFAULT_PRESETS.len() as u64);
    assert_eq!(first.settings_inserted, 1);
    pool1.close().await;

    let (pool2, second) = init_database_with_report(&db_path).await.unwrap();
    assert_eq!(second, SeedReport::default());

    let presets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM presets")
        .fetch_one(&pool2)
        .await
        .unwrap();
    let settings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_settings")
        .fetch_one(&pool2)
        .await
        .unwrap();

    assert_eq!(presets, 5);
    assert_eq!(settings, 1);
}

#[tokio::test]
async fn test_seeded_classic_sine() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("synth_database.db"))
        .await
        .unwrap();

    let (waveform, cutoff, pitch_bend, modulation): (String, f64, f64, f64) = sqlx::query_as(
        "SELECT waveform, cutoff, pitch_bend, modulation FROM presets WHERE name = 'Classic Sine'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(waveform, "sine");
    assert_eq!(cutoff, 2000.0);
    assert_eq!(pitch_bend, 0.0);
    assert_eq!(modulation, 0.25);
}
