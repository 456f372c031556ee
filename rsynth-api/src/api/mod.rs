//! HTTP API handlers for rsynth-api

pub mod compositions;
pub mod extract;
pub mod health;
pub mod logs;
pub mod presets;
pub mod settings;
pub mod types;

pub use compositions::composition_routes;
pub use extract::{ApiJson, ApiPath};
pub use health::health_routes;
pub use logs::log_routes;
pub use presets::preset_routes;
pub use settings::settings_routes;
pub use types::{CreatedResponse, MessageResponse};
