//! Command-line arguments and tracing setup shared by the binaries

use clap::Args;
use rsynth_common::config::{ConfigOverrides, ServerConfig, TomlConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration arguments; each one may also come from the environment
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "RSYNTH_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory holding the browser client assets
    #[arg(long, env = "RSYNTH_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// CSV file written with all performance logs on shutdown
    #[arg(long, env = "RSYNTH_EXPORT_PATH")]
    pub export_path: Option<PathBuf>,

    /// Default tracing level when RUST_LOG is unset
    #[arg(long, env = "RSYNTH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// TOML config file (defaults to <config_dir>/rsynth/config.toml if present)
    #[arg(short, long, env = "RSYNTH_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            database_path: self.database.clone(),
            static_dir: self.static_dir.clone(),
            export_path: self.export_path.clone(),
            log_level: self.log_level.clone(),
        }
    }

    /// Merge these arguments with the config file and compiled defaults
    ///
    /// Runs before tracing is installed, so a warning about a skipped
    /// config file is handed back for the caller to log.
    pub fn resolve(&self) -> rsynth_common::Result<(ServerConfig, Option<String>)> {
        let loaded = TomlConfig::load(self.config.as_deref())?;
        Ok((ServerConfig::resolve(self.overrides(), loaded.file), loaded.warning))
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},sqlx=warn", level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_cli_flags_become_overrides() {
        let cli = TestCli::try_parse_from([
            "rsynth-api",
            "--port",
            "8123",
            "--database",
            "/tmp/synth.db",
            "--export-path",
            "out.csv",
        ])
        .unwrap();

        let overrides = cli.config.overrides();
        assert_eq!(overrides.port, Some(8123));
        assert_eq!(overrides.database_path, Some(PathBuf::from("/tmp/synth.db")));
        assert_eq!(overrides.export_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_resolve_reads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rsynth.toml");
        std::fs::write(&path, "port = 4100\nlog_level = \"debug\"\n").unwrap();

        let cli = TestCli::try_parse_from([
            "rsynth-api",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "warn",
        ])
        .unwrap();

        let (config, warning) = cli.config.resolve().unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.log_level, "warn");
        assert_eq!(warning, None);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = TestCli::try_parse_from(["rsynth-api", "--port", "99999"]);
        assert!(result.is_err());
    }
}
