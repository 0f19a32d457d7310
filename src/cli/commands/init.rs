//! Init command implementation
//!
//! Writes a commented default configuration file.

use clap::Args;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# postfetch configuration

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[source]
# The request URL for an identifier is base_url with the identifier appended
base_url = "https://jsonplaceholder.typicode.com/posts/"
# Fixed per-request timeout in seconds
timeout_seconds = 5
# Maximum number of simultaneous in-flight requests
max_in_flight = 8

[storage]
# SQLite database file (created if missing)
db_path = "data/posts.db"

[export]
# CSV export file (fully replaced on each run)
csv_path = "data/posts.csv"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "postfetch.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.output);

        if path.exists() && !self.force {
            eprintln!(
                "Configuration file already exists: {} (use --force to overwrite)",
                self.output
            );
            return Ok(1);
        }

        tokio::fs::write(path, CONFIG_TEMPLATE).await?;

        tracing::info!(path = %self.output, "Configuration file written");
        println!("Wrote default configuration to {}", self.output);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_and_validates() {
        let config: crate::config::PostFetchConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.source.timeout_seconds, 5);
    }

    #[tokio::test]
    async fn test_init_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("postfetch.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("postfetch.toml");
        tokio::fs::write(&output, "existing").await.unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 1);
        assert_eq!(tokio::fs::read_to_string(&output).await.unwrap(), "existing");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(tokio::fs::read_to_string(&output)
            .await
            .unwrap()
            .contains("[source]"));
    }
}
