//! Store access layer for rsynth-api
//!
//! One function per statement; handlers never build SQL themselves.

pub mod compositions;
pub mod logs;
pub mod presets;
pub mod settings;
