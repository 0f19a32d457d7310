//! Fetch command implementation
//!
//! Runs one pipeline pass over either an inclusive identifier range or the
//! fixed fault-injection endpoint set.

use crate::config::load_config_or_default;
use crate::core::pipeline::PipelineCoordinator;
use crate::domain::ResourceId;
use clap::Args;

/// Deliberately invalid endpoints for fault-injection testing
///
/// Used with an empty base URL, so each entry is the full request target:
/// an out-of-range id against nothing, a non-routable address, and two
/// unresolvable hosts.
const FAULT_INJECTION_ENDPOINTS: [&str; 4] = [
    "99999",
    "http://10.255.255.1",
    "https://invalid-url.test/",
    "https://invalid-url.com",
];

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// First post id of the range (inclusive)
    #[arg(long, default_value_t = 1)]
    pub start: u64,

    /// Last post id of the range (inclusive)
    #[arg(long, default_value_t = 20)]
    pub end: u64,

    /// Fetch the fixed fault-injection endpoint set instead of a range
    #[arg(long)]
    pub test: bool,

    /// Override the configured base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

impl FetchArgs {
    /// Execute the fetch command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting fetch command");

        let mut config = match load_config_or_default(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(base_url) = &self.base_url {
            tracing::info!(base_url = %base_url, "Overriding base URL from CLI");
            config.source.base_url = base_url.clone();
        }

        let identifiers: Vec<ResourceId> = if self.test {
            tracing::info!("Test mode: using fault-injection endpoints");
            // The endpoints are full URLs; the base URL must not prefix them
            config.source.base_url = String::new();
            FAULT_INJECTION_ENDPOINTS
                .iter()
                .map(|&endpoint| ResourceId::from(endpoint))
                .collect()
        } else {
            if self.start > self.end {
                tracing::error!(start = self.start, end = self.end, "Invalid range");
                eprintln!("Invalid range: --start must not exceed --end");
                return Ok(2);
            }
            (self.start..=self.end).map(ResourceId::from).collect()
        };

        let coordinator = match PipelineCoordinator::new(config) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create pipeline coordinator");
                eprintln!("Failed to initialize pipeline: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let summary = match coordinator.execute(&identifiers).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Pipeline run failed");
                eprintln!("Pipeline run failed: {e}");
                return Ok(5);
            }
        };

        println!();
        println!("Run Summary:");
        println!("  Attempted: {}", summary.attempted);
        println!("  Succeeded: {}", summary.succeeded);
        println!("  Failed: {}", summary.failed);
        println!("  Persisted rows: {}", summary.persisted);
        println!("  Exported rows: {}", summary.exported);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());

        if !summary.failures.is_empty() {
            println!();
            println!("Failures:");
            for failure in &summary.failures {
                println!("  - {}: {}", failure.identifier, failure.reason);
            }
        }
        println!();

        let exit_code = if summary.is_successful() {
            println!("Fetch completed successfully.");
            0
        } else {
            println!("Fetch completed with failures.");
            1 // Partial success
        };

        Ok(exit_code)
    }
}
