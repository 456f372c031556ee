//! Configuration loading and resolution
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument or environment variable (handled by clap in the binaries)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;
/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "synth_database.db";
/// Default directory for the browser assets
pub const DEFAULT_STATIC_DIR: &str = ".";
/// Default target of the shutdown CSV export
pub const DEFAULT_EXPORT_FILE: &str = "performance_logs.csv";
/// Default tracing level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of the optional TOML config file
///
/// All keys are optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse a config file; any read or parse failure is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{} ({})", e, path.display())))
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Platform config location: `<config_dir>/rsynth/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rsynth").join("config.toml"))
    }

    /// Load the config file from the platform location or an explicit path
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
        Self::load_from(explicit, Self::default_path())
    }

    /// Load the config file
    ///
    /// An explicitly named file must exist and parse. The default file is
    /// optional: if it is missing the result is empty, and if it is broken
    /// the defaults are used and the problem is returned as a warning. The
    /// caller logs it once its subscriber is installed.
    pub fn load_from(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            return Ok(LoadedConfig {
                file: Self::from_file(path)?,
                warning: None,
            });
        }

        match default {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(file) => Ok(LoadedConfig {
                    file,
                    warning: None,
                }),
                Err(e) => Ok(LoadedConfig {
                    file: Self::default(),
                    warning: Some(format!("Ignoring config file: {}", e)),
                }),
            },
            _ => Ok(LoadedConfig::default()),
        }
    }
}

/// Config file contents plus any warning raised while reading it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub file: TomlConfig,
    pub warning: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
    pub export_path: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Merge overrides, file values and defaults (in that priority)
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            database_path: overrides
                .database_path
                .or(file.database_path)
                .unwrap_or(defaults.database_path),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or(defaults.static_dir),
            export_path: overrides
                .export_path
                .or(file.export_path)
                .unwrap_or(defaults.export_path),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Listen address (all interfaces)
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("synth_database.db"));
        assert_eq!(config.export_path, PathBuf::from("performance_logs.csv"));
        assert_eq!(config.bind_addr().port(), 3000);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let result = TomlConfig::from_toml_str("prot = 8080\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
