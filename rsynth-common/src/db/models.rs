//! Database row types and request bodies
//!
//! Request structs carry the same defaults as the table DDL in
//! [`crate::db::init`], so an omitted field and an omitted column end up with
//! the same stored value.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use std::fmt;

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
}

impl Waveform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Synthesis parameters stored with every preset
///
/// Missing or `null` fields in a request body take the column defaults.
/// Rows are decoded as non-NULL values; the schema created here declares
/// every parameter column `NOT NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(from = "SynthParamsBody")]
pub struct SynthParams {
    pub frequency: f64,
    pub waveform: Waveform,
    pub cutoff: f64,
    pub resonance: f64,
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    pub volume: f64,
    pub reverb: f64,
    pub delay: f64,
    pub chorus: f64,
    pub pitch_bend: f64,
    pub modulation: f64,
}

impl SynthParams {
    /// Column defaults of the `presets` table
    pub const DEFAULT: SynthParams = SynthParams {
        frequency: 440.0,
        waveform: Waveform::Sine,
        cutoff: 1000.0,
        resonance: 1.0,
        attack: 0.1,
        decay: 0.3,
        sustain: 0.7,
        release: 0.5,
        volume: 0.3,
        reverb: 0.25,
        delay: 0.15,
        chorus: 0.35,
        pitch_bend: 0.0,
        modulation: 0.25,
    };

    /// Bind every parameter in column order:
    /// frequency, waveform, cutoff, resonance, attack, decay, sustain,
    /// release, volume, reverb, delay, chorus, pitch_bend, modulation
    pub fn bind_all<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.frequency)
            .bind(self.waveform)
            .bind(self.cutoff)
            .bind(self.resonance)
            .bind(self.attack)
            .bind(self.decay)
            .bind(self.sustain)
            .bind(self.release)
            .bind(self.volume)
            .bind(self.reverb)
            .bind(self.delay)
            .bind(self.chorus)
            .bind(self.pitch_bend)
            .bind(self.modulation)
    }
}

impl Default for SynthParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wire form of [`SynthParams`]; absent and `null` read the same
#[derive(Default, Deserialize)]
#[serde(default)]
struct SynthParamsBody {
    frequency: Option<f64>,
    waveform: Option<Waveform>,
    cutoff: Option<f64>,
    resonance: Option<f64>,
    attack: Option<f64>,
    decay: Option<f64>,
    sustain: Option<f64>,
    release: Option<f64>,
    volume: Option<f64>,
    reverb: Option<f64>,
    delay: Option<f64>,
    chorus: Option<f64>,
    pitch_bend: Option<f64>,
    modulation: Option<f64>,
}

impl From<SynthParamsBody> for SynthParams {
    fn from(body: SynthParamsBody) -> Self {
        let d = SynthParams::DEFAULT;
        Self {
            frequency: body.frequency.unwrap_or(d.frequency),
            waveform: body.waveform.unwrap_or(d.waveform),
            cutoff: body.cutoff.unwrap_or(d.cutoff),
            resonance: body.resonance.unwrap_or(d.resonance),
            attack: body.attack.unwrap_or(d.attack),
            decay: body.decay.unwrap_or(d.decay),
            sustain: body.sustain.unwrap_or(d.sustain),
            release: body.release.unwrap_or(d.release),
            volume: body.volume.unwrap_or(d.volume),
            reverb: body.reverb.unwrap_or(d.reverb),
            delay: body.delay.unwrap_or(d.delay),
            chorus: body.chorus.unwrap_or(d.chorus),
            pitch_bend: body.pitch_bend.unwrap_or(d.pitch_bend),
            modulation: body.modulation.unwrap_or(d.modulation),
        }
    }
}

/// A named bundle of synthesizer parameter values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Preset {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub params: SynthParams,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of POST /api/presets and PUT /api/presets/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub params: SynthParams,
}

impl PresetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: SynthParams::DEFAULT,
        }
    }
}

// ============================================================================
// User settings
// ============================================================================

/// Per-user application settings (one row per `user_id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSettings {
    pub id: i64,
    pub user_id: String,
    pub theme: String,
    pub keyboard_layout: String,
    pub audio_latency: i64,
    pub sample_rate: i64,
    pub master_volume: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of PUT /api/settings/:user_id
///
/// Missing or `null` fields take the column defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsBody")]
pub struct SettingsRequest {
    pub theme: String,
    pub keyboard_layout: String,
    pub audio_latency: i64,
    pub sample_rate: i64,
    pub master_volume: f64,
}

impl Default for SettingsRequest {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            keyboard_layout: "qwerty".to_string(),
            audio_latency: 128,
            sample_rate: 44100,
            master_volume: 0.3,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct SettingsBody {
    theme: Option<String>,
    keyboard_layout: Option<String>,
    audio_latency: Option<i64>,
    sample_rate: Option<i64>,
    master_volume: Option<f64>,
}

impl From<SettingsBody> for SettingsRequest {
    fn from(body: SettingsBody) -> Self {
        let d = SettingsRequest::default();
        Self {
            theme: body.theme.unwrap_or(d.theme),
            keyboard_layout: body.keyboard_layout.unwrap_or(d.keyboard_layout),
            audio_latency: body.audio_latency.unwrap_or(d.audio_latency),
            sample_rate: body.sample_rate.unwrap_or(d.sample_rate),
            master_volume: body.master_volume.unwrap_or(d.master_volume),
        }
    }
}

// ============================================================================
// Performance logs
// ============================================================================

/// Effect name → intensity at the moment a note was played
pub type EffectLevels = BTreeMap<String, f64>;

/// One played note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PerformanceLog {
    pub id: i64,
    pub session_id: Option<String>,
    pub note_played: Option<String>,
    pub frequency: Option<f64>,
    pub duration: Option<f64>,
    pub waveform: Option<Waveform>,
    pub effects_used: Option<Json<EffectLevels>>,
    pub timestamp: NaiveDateTime,
}

/// Body of POST /api/logs
///
/// Every field is optional; missing values are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub session_id: Option<String>,
    pub note_played: Option<String>,
    pub frequency: Option<f64>,
    pub duration: Option<f64>,
    pub waveform: Option<Waveform>,
    pub effects_used: Option<EffectLevels>,
}

/// Aggregate of performance logs for one waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WaveformStats {
    pub waveform: Option<Waveform>,
    pub total_notes: i64,
    pub avg_duration: Option<f64>,
    pub total_sessions: i64,
    pub unique_notes: i64,
}

// ============================================================================
// Compositions
// ============================================================================

/// A single timed note inside a composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub note: String,
    pub duration: f64,
    pub time: f64,
}

/// A named, ordered sequence of timed notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Composition {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub notes_data: Json<Vec<NoteEvent>>,
    pub tempo: i64,
    pub key_signature: String,
    pub time_signature: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of POST /api/compositions
///
/// Missing or `null` fields take the column defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompositionBody")]
pub struct CompositionRequest {
    pub name: String,
    pub description: Option<String>,
    pub notes_data: Vec<NoteEvent>,
    pub tempo: i64,
    pub key_signature: String,
    pub time_signature: String,
}

#[derive(Deserialize)]
struct CompositionBody {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    notes_data: Option<Vec<NoteEvent>>,
    #[serde(default)]
    tempo: Option<i64>,
    #[serde(default)]
    key_signature: Option<String>,
    #[serde(default)]
    time_signature: Option<String>,
}

impl From<CompositionBody> for CompositionRequest {
    fn from(body: CompositionBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            notes_data: body.notes_data.unwrap_or_default(),
            tempo: body.tempo.unwrap_or(120),
            key_signature: body.key_signature.unwrap_or_else(|| "C".to_string()),
            time_signature: body.time_signature.unwrap_or_else(|| "4/4".to_string()),
        }
    }
}
