//! # RetroSynth Common Library
//!
//! Shared code for the RetroSynth server and its operational tools:
//! - Error type and result alias
//! - Configuration resolution (CLI/env, TOML file, compiled defaults)
//! - Data model (database rows and request bodies)
//! - Schema creation and default seed data

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
