//! Configuration management for the dashboard
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file,
//! then `DASHBOARD__SECTION__KEY` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file used when `DASHBOARD_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.toml";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub gallery: GalleryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
    /// Serve Prometheus metrics at /metrics
    pub metrics: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// XGBoost JSON artifact
    pub path: PathBuf,
}

/// Directories of pre-rendered visualizations
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    pub maps_dir: PathBuf,
    pub interpolation_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load from `DASHBOARD_CONFIG`, falling back to [`DEFAULT_CONFIG_PATH`]
    pub fn load() -> Result<Self> {
        let path = std::env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(path)
    }

    /// Load configuration using a specific file; the file may be absent
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.addr", "0.0.0.0:8501")?
            .set_default("server.metrics", true)?
            .set_default("model.path", "model/valores_suelo_xgboost.json")?
            .set_default("gallery.maps_dir", "data/mapas")?
            .set_default("gallery.interpolation_dir", "data/interpolacion")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.server.addr, "0.0.0.0:8501");
        assert!(config.server.metrics);
        assert_eq!(config.model.path, PathBuf::from("model/valores_suelo_xgboost.json"));
        assert_eq!(config.gallery.maps_dir, PathBuf::from("data/mapas"));
        assert_eq!(config.gallery.interpolation_dir, PathBuf::from("data/interpolacion"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
addr = "127.0.0.1:9000"

[model]
path = "/srv/models/precios.json"

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.model.path, PathBuf::from("/srv/models/precios.json"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.gallery.maps_dir, PathBuf::from("data/mapas"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server\naddr = ").unwrap();

        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
