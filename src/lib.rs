//! # postfetch - Concurrent fetch-validate-persist pipeline
//!
//! postfetch retrieves a batch of remote JSON resources by identifier,
//! classifies each response, aggregates the successes, and durably stores
//! them in two independent sinks: a SQLite table (idempotent upsert) and a
//! CSV export file (full overwrite per run).
//!
//! ## Architecture
//!
//! postfetch follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (pipeline orchestration, aggregation)
//! - [`adapters`] - External integrations (HTTP source, SQLite, CSV)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postfetch::config::PostFetchConfig;
//! use postfetch::core::pipeline::PipelineCoordinator;
//! use postfetch::domain::ResourceId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PostFetchConfig::default();
//!     let identifiers: Vec<ResourceId> = (1..=20).map(ResourceId::from).collect();
//!
//!     let coordinator = PipelineCoordinator::new(config)?;
//!     let summary = coordinator.execute(&identifiers).await?;
//!
//!     println!("Fetched {} of {}", summary.succeeded, summary.attempted);
//!     Ok(())
//! }
//! ```
//!
//! ## Outcome Classification
//!
//! Every fetch attempt produces exactly one [`domain::FetchOutcome`]; no
//! error escapes the fetcher. Failures are typed data, not exceptions:
//!
//! ```rust
//! use postfetch::domain::{FailureReason, FetchOutcome};
//!
//! fn describe(outcome: &FetchOutcome) -> String {
//!     match outcome {
//!         FetchOutcome::Success(post) => format!("got post {:?}", post.id),
//!         FetchOutcome::Failure(reason) => format!("failed: {reason}"),
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Sink-level failures use the [`domain::PostFetchError`] type and abort the
//! run; per-fetch failures never do. Fallible operations return
//! [`domain::Result`]:
//!
//! ```rust,no_run
//! use postfetch::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = postfetch::config::load_config("postfetch.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! postfetch uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, error};
//!
//! info!(attempted = 20, succeeded = 18, failed = 2, "Fetch batch completed");
//! error!(url = "https://example.com/posts/7", "Fetch failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
