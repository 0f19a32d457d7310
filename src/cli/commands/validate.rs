//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(path = %config_path, "Validating configuration");

        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid: {config_path}");
                println!("  base_url: {}", config.source.base_url);
                println!("  timeout_seconds: {}", config.source.timeout_seconds);
                println!("  max_in_flight: {}", config.source.max_in_flight);
                println!("  db_path: {}", config.storage.db_path.display());
                println!("  csv_path: {}", config.export.csv_path.display());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("Configuration invalid: {e}");
                Ok(2) // Configuration error exit code
            }
        }
    }
}
