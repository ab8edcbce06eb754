use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Resolve the prediction-service base URL based on priority:
/// 1. Explicit value (CLI flag)
/// 2. EVCAST_SERVICE_URL environment variable
/// 3. `service_url` from the config file
/// 4. Built-in default (a locally running service)
pub fn resolve_service_url(explicit: Option<&str>, config: &Config) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(url) = std::env::var("EVCAST_SERVICE_URL")
        && !url.is_empty()
    {
        return url;
    }

    if let Some(url) = &config.service_url {
        return url.clone();
    }

    DEFAULT_SERVICE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the prediction service.
    #[serde(default)]
    pub service_url: Option<String>,

    /// Horizon preloaded into the dashboard input instead of 12.
    #[serde(default)]
    pub default_horizon: Option<u32>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("evcast").join("config.toml"))
            .ok_or_else(|| {
                Error::Config("Could not determine config directory for this platform".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.service_url.is_none());
        assert!(config.default_horizon.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            service_url: Some("http://forecast.internal:8000".to_string()),
            default_horizon: Some(24),
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.service_url.as_deref(),
            Some("http://forecast.internal:8000")
        );
        assert_eq!(loaded.default_horizon, Some(24));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_yields_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nope.toml");

        let loaded = Config::load_from(&config_path)?;
        assert!(loaded.service_url.is_none());
        Ok(())
    }

    #[test]
    fn test_explicit_url_wins() {
        let config = Config {
            service_url: Some("http://from-file:8000".to_string()),
            default_horizon: None,
        };
        let url = resolve_service_url(Some("http://from-flag:9000"), &config);
        assert_eq!(url, "http://from-flag:9000");
    }

    #[test]
    fn test_config_file_beats_default() {
        let config = Config {
            service_url: Some("http://from-file:8000".to_string()),
            default_horizon: None,
        };
        // Environment lookup only applies when the variable is set; tests
        // avoid mutating process env, so flag=None falls through to the file.
        if std::env::var("EVCAST_SERVICE_URL").is_err() {
            assert_eq!(resolve_service_url(None, &config), "http://from-file:8000");
        }
    }

    #[test]
    fn test_default_url_when_nothing_configured() {
        if std::env::var("EVCAST_SERVICE_URL").is_err() {
            assert_eq!(
                resolve_service_url(None, &Config::default()),
                DEFAULT_SERVICE_URL
            );
        }
    }
}
