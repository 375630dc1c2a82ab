//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "signup_tui=info";

/// User configuration for the TUI
///
/// Only display preferences live here; form values are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Render password fields as bullets (defaults to true)
    pub mask_passwords: Option<bool>,
    /// `tracing` filter directive, e.g. `signup_tui=debug`
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Effective log filter
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("signup-tui-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.mask_passwords.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            mask_passwords: Some(false),
            log_filter: Some("signup_tui=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.mask_passwords, Some(false));
        assert_eq!(parsed.log_filter(), "signup_tui=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.mask_passwords.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mask_passwords": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mask_passwords, Some(true));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = TuiConfig::load_from(&temp_path("missing/config.json")).unwrap();
        assert!(config.mask_passwords.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_path("roundtrip/config.json");
        let config = TuiConfig {
            mask_passwords: Some(false),
            ..Default::default()
        };

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded.mask_passwords, Some(false));
        assert!(loaded.log_filter.is_none());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let path = temp_path("invalid/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result = TuiConfig::load_from(&path);
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert!(result.is_err());
    }
}
