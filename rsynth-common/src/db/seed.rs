//! Default seed data
//!
//! Five factory presets and the `default` settings row. Inserts use
//! `INSERT OR IGNORE`, so re-running leaves existing rows untouched.

use crate::db::models::{SynthParams, Waveform};
use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

/// A factory preset
#[derive(Debug, Clone, Copy)]
pub struct SeedPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: SynthParams,
}

/// Factory presets, in insertion order
pub const DEFAULT_PRESETS: [SeedPreset; 5] = [
    SeedPreset {
        name: "Classic Sine",
        description: "Pure sine wave with minimal effects",
        params: SynthParams {
            frequency: 440.0,
            waveform: Waveform::Sine,
            cutoff: 2000.0,
            resonance: 0.5,
            attack: 0.05,
            decay: 0.2,
            sustain: 0.8,
            release: 0.3,
            volume: 0.25,
            reverb: 0.1,
            delay: 0.05,
            chorus: 0.1,
            ..SynthParams::DEFAULT
        },
    },
    SeedPreset {
        name: "Warm Pad",
        description: "Smooth pad sound with reverb",
        params: SynthParams {
            frequency: 220.0,
            waveform: Waveform::Sawtooth,
            cutoff: 800.0,
            resonance: 2.0,
            attack: 0.5,
            decay: 0.8,
            sustain: 0.9,
            release: 1.2,
            volume: 0.2,
            reverb: 0.6,
            delay: 0.3,
            chorus: 0.4,
            ..SynthParams::DEFAULT
        },
    },
    SeedPreset {
        name: "Lead Synth",
        description: "Bright lead sound with delay",
        params: SynthParams {
            frequency: 880.0,
            waveform: Waveform::Square,
            cutoff: 3000.0,
            resonance: 3.0,
            attack: 0.02,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
            volume: 0.3,
            reverb: 0.2,
            delay: 0.4,
            chorus: 0.2,
            ..SynthParams::DEFAULT
        },
    },
    SeedPreset {
        name: "Bass Line",
        description: "Deep bass with filter modulation",
        params: SynthParams {
            frequency: 110.0,
            waveform: Waveform::Sawtooth,
            cutoff: 400.0,
            resonance: 4.0,
            attack: 0.1,
            decay: 0.3,
            sustain: 0.8,
            release: 0.5,
            volume: 0.35,
            reverb: 0.1,
            delay: 0.1,
            chorus: 0.05,
            ..SynthParams::DEFAULT
        },
    },
    SeedPreset {
        name: "Noise Drone",
        description: "Atmospheric noise texture",
        params: SynthParams {
            frequency: 220.0,
            waveform: Waveform::Noise,
            cutoff: 500.0,
            resonance: 1.5,
            attack: 2.0,
            decay: 1.0,
            sustain: 0.6,
            release: 3.0,
            volume: 0.15,
            reverb: 0.8,
            delay: 0.6,
            chorus: 0.3,
            ..SynthParams::DEFAULT
        },
    },
];

/// User id of the settings row created by the seed
pub const DEFAULT_USER_ID: &str = "default";

/// Rows actually inserted by [`seed_defaults`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub presets_inserted: u64,
    pub settings_inserted: u64,
}

/// Insert factory presets and default settings (insert-or-ignore)
pub async fn seed_defaults(pool: &SqlitePool) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for preset in DEFAULT_PRESETS.iter() {
        let query = sqlx::query(
            r#"
            INSERT OR IGNORE INTO presets (
                name, description, frequency, waveform, cutoff, resonance,
                attack, decay, sustain, release, volume, reverb, delay, chorus,
                pitch_bend, modulation
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(preset.name)
        .bind(preset.description);

        let result = preset.params.bind_all(query).execute(pool).await?;

        report.presets_inserted += result.rows_affected();
    }

    let result = sqlx::query(
        "INSERT OR IGNORE INTO user_settings (user_id, theme, keyboard_layout) VALUES (?, 'dark', 'qwerty')",
    )
    .bind(DEFAULT_USER_ID)
    .execute(pool)
    .await?;
    report.settings_inserted = result.rows_affected();

    if report.presets_inserted > 0 || report.settings_inserted > 0 {
        info!(
            "Seeded {} default presets and {} settings rows",
            report.presets_inserted, report.settings_inserted
        );
    }

    Ok(report)
}
