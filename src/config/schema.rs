//! Configuration schema types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main postfetch configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFetchConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Remote source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Relational sink settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tabular sink settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl PostFetchConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.storage.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Remote source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL; the request URL is this value with the identifier appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum number of simultaneous in-flight requests
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("source.base_url must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("source.timeout_seconds must be at least 1".to_string());
        }
        if self.max_in_flight == 0 {
            return Err("source.max_in_flight must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

/// Relational sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file (created if missing)
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.db_path.as_os_str().is_empty() {
            return Err("storage.db_path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Tabular sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path to the CSV export file (fully replaced on each run)
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.csv_path.as_os_str().is_empty() {
            return Err("export.csv_path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com/posts/".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_max_in_flight() -> usize {
    8
}

fn default_db_path() -> PathBuf {
    PathBuf::from("data/posts.db")
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/posts.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PostFetchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.source.timeout_seconds, 5);
        assert_eq!(config.source.max_in_flight, 8);
        assert_eq!(config.storage.db_path, PathBuf::from("data/posts.db"));
        assert_eq!(config.export.csv_path, PathBuf::from("data/posts.csv"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = PostFetchConfig::default();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = PostFetchConfig::default();
        config.source.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = PostFetchConfig::default();
        config.source.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_in_flight_rejected() {
        let mut config = PostFetchConfig::default();
        config.source.max_in_flight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PostFetchConfig = toml::from_str(
            r#"
            [source]
            base_url = "http://localhost:9000/posts/"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.base_url, "http://localhost:9000/posts/");
        assert_eq!(config.source.timeout_seconds, 5);
        assert_eq!(config.application.log_level, "info");
    }
}
