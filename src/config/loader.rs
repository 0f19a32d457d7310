//! Configuration loader with TOML parsing

use super::schema::PostFetchConfig;
use crate::domain::errors::PostFetchError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into `PostFetchConfig`
/// 3. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use postfetch::config::load_config;
///
/// let config = load_config("postfetch.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PostFetchConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PostFetchError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PostFetchError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: PostFetchConfig = toml::from_str(&contents)
        .map_err(|e| PostFetchError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.validate().map_err(|e| {
        PostFetchError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration from a TOML file, falling back to defaults
///
/// Every configuration field has a default, so a missing file is not an
/// error for commands that can run without one. A file that exists but
/// fails to parse or validate is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PostFetchConfig> {
    let path = path.as_ref();

    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(PostFetchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/postfetch.toml");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration file not found"));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("/nonexistent/postfetch.toml").unwrap();
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_load_config_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [application]
            log_level = "debug"

            [source]
            base_url = "http://localhost:9000/posts/"
            timeout_seconds = 2
            max_in_flight = 4
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.source.base_url, "http://localhost:9000/posts/");
        assert_eq!(config.source.timeout_seconds, 2);
        assert_eq!(config.source.max_in_flight, 4);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml =").unwrap();

        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn test_load_config_failing_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [source]
            base_url = ""
            "#
        )
        .unwrap();

        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }
}
