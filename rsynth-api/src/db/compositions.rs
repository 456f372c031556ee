//! Composition queries
//!
//! `notes_data` is written as JSON text and decoded back into `NoteEvent`s
//! on every read.

use rsynth_common::db::{Composition, CompositionRequest};
use rsynth_common::Result;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Insert a composition and return its id
pub async fn create_composition(pool: &SqlitePool, composition: &CompositionRequest) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO compositions (
            name, description, notes_data, tempo, key_signature, time_signature
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&composition.name)
    .bind(&composition.description)
    .bind(Json(&composition.notes_data))
    .bind(composition.tempo)
    .bind(&composition.key_signature)
    .bind(&composition.time_signature)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All compositions, newest first
pub async fn list_compositions(pool: &SqlitePool) -> Result<Vec<Composition>> {
    let compositions = sqlx::query_as::<_, Composition>(
        "SELECT * FROM compositions ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(compositions)
}

/// One composition by id
pub async fn get_composition(pool: &SqlitePool, id: i64) -> Result<Option<Composition>> {
    let composition = sqlx::query_as::<_, Composition>("SELECT * FROM compositions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(composition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsynth_common::db::{connect_memory, NoteEvent};

    fn arpeggio() -> CompositionRequest {
        CompositionRequest {
            name: "Arpeggio".to_string(),
            description: Some("C major".to_string()),
            notes_data: vec![
                NoteEvent { note: "C4".to_string(), duration: 0.5, time: 0.0 },
                NoteEvent { note: "E4".to_string(), duration: 0.5, time: 0.5 },
                NoteEvent { note: "G4".to_string(), duration: 1.0, time: 1.0 },
            ],
            tempo: 96,
            key_signature: "C".to_string(),
            time_signature: "3/4".to_string(),
        }
    }

    #[tokio::test]
    async fn test_notes_survive_storage() {
        let pool = connect_memory().await.unwrap();
        let req = arpeggio();

        let id = create_composition(&pool, &req).await.unwrap();
        let stored = get_composition(&pool, id).await.unwrap().unwrap();

        assert_eq!(stored.notes_data.0, req.notes_data);
        assert_eq!(stored.tempo, 96);
        assert_eq!(stored.time_signature, "3/4");

        let raw: String = sqlx::query_scalar("SELECT notes_data FROM compositions WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(raw.starts_with(r#"[{"note":"C4""#), "unexpected encoding: {}", raw);
    }

    #[tokio::test]
    async fn test_list_and_missing() {
        let pool = connect_memory().await.unwrap();
        assert!(list_compositions(&pool).await.unwrap().is_empty());
        assert!(get_composition(&pool, 1).await.unwrap().is_none());

        create_composition(&pool, &arpeggio()).await.unwrap();
        assert_eq!(list_compositions(&pool).await.unwrap().len(), 1);
    }
}
