//! Configuration file handling
//!
//! The configuration is a single JSON object. Every field has a default,
//! so `{}` is a valid configuration (in-memory store, port 8080).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::{FileRecordStore, InMemoryRecordStore, RecordStore};

use super::args::ServeOverrides;
use super::errors::{CliError, CliResult};

/// Default location of the data file written by `init`
pub const DEFAULT_DATA_FILE: &str = "./data/frameworks.json";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON data file; `None` keeps records in memory only
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Configuration written by `init`
    pub fn initial() -> Self {
        Self {
            data_file: Some(PathBuf::from(DEFAULT_DATA_FILE)),
            ..Default::default()
        }
    }

    /// Load and validate configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate field ranges
    pub fn validate(&self) -> CliResult<()> {
        self.server
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        if let Some(data_file) = &self.data_file {
            if data_file.as_os_str().is_empty() {
                return Err(CliError::config_error("data_file must not be empty"));
            }
        }

        self.log
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        Ok(())
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: ServeOverrides) -> Self {
        self.server.override_listener(overrides.host, overrides.port);
        if let Some(data_file) = overrides.data_file {
            self.data_file = Some(data_file);
        }
        self
    }

    /// Open the configured record store
    pub fn open_store(&self) -> CliResult<Arc<dyn RecordStore>> {
        Ok(match &self.data_file {
            Some(path) => Arc::new(FileRecordStore::open(path)?),
            None => Arc::new(InMemoryRecordStore::new()),
        })
    }

    /// Write this configuration as pretty JSON
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkRecord;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "data_file": "/srv/frameworks.json",
                "server": {"host": "127.0.0.1", "port": 3000, "cors_origins": ["http://localhost:5173"]},
                "log": {"level": "debug", "json": true}
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/frameworks.json")));
        assert_eq!(config.server.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.server.cors_origins.len(), 1);
        assert!(config.log.json);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_is_error_for_load() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ port: 1").unwrap();
        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let config = Config {
            data_file: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = Config::default();
        config.log.level = "framework_registry=verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_cors_origin_rejected() {
        let mut config = Config::default();
        config.server.cors_origins = vec!["*.example.com".to_string()];
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(ServeOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(9999),
            data_file: Some(PathBuf::from("x.json")),
        });
        assert_eq!(config.server.listen_addr(), "127.0.0.1:9999");
        assert_eq!(config.data_file, Some(PathBuf::from("x.json")));

        let untouched = Config::initial().with_overrides(ServeOverrides::default());
        assert_eq!(untouched, Config::initial());
    }

    #[test]
    fn test_open_store_backends() {
        let store = Config::default().open_store().unwrap();
        store.save(FrameworkRecord::new("ReactJS")).unwrap();
        assert_eq!(store.count().unwrap(), 1);

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("frameworks.json");
        let config = Config::default().with_overrides(ServeOverrides {
            data_file: Some(path.clone()),
            ..Default::default()
        });
        config.open_store().unwrap().save(FrameworkRecord::new("Vue.js")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");

        Config::initial().save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::initial());
    }
}
