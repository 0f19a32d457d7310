//! Pipeline coordinator - main orchestrator for one run
//!
//! Coordinates fetch, aggregation, and the two sinks. Storage access is
//! scoped to the run: the SQLite pool is opened after fetching completes
//! and closed before the summary is returned, so repeated invocations do
//! not contend on a long-lived handle.

use crate::adapters::csv_export::CsvExporter;
use crate::adapters::http::ResourceClient;
use crate::adapters::sqlite::PostStore;
use crate::config::PostFetchConfig;
use crate::core::aggregate::{count_outcomes, extract_successes};
use crate::core::pipeline::summary::RunSummary;
use crate::domain::{FetchOutcome, ResourceId, Result};
use std::time::Instant;

/// Pipeline coordinator
pub struct PipelineCoordinator {
    config: PostFetchConfig,
    client: ResourceClient,
}

impl PipelineCoordinator {
    /// Create a new pipeline coordinator
    ///
    /// Builds the shared HTTP client from the source configuration. The
    /// persistence resources are not acquired here; they are opened per
    /// run inside [`execute`](Self::execute).
    pub fn new(config: PostFetchConfig) -> Result<Self> {
        let client = ResourceClient::new(&config.source)?;
        Ok(Self { config, client })
    }

    /// Execute one pipeline run over the given identifier batch
    ///
    /// 1. Fetches all identifiers concurrently, preserving input order
    /// 2. Filters successful payloads
    /// 3. Upserts complete payloads into the SQLite table
    /// 4. Overwrites the CSV export with the run's payloads
    ///
    /// Individual fetch failures are captured in the returned
    /// [`RunSummary`]; they never fail the run. Sink failures propagate
    /// and abort the run without partial-success reporting.
    pub async fn execute(&self, identifiers: &[ResourceId]) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut summary = RunSummary::new();
        summary.attempted = identifiers.len();

        tracing::info!(batch_size = identifiers.len(), "Starting pipeline run");

        let outcomes = self.client.fetch_all(identifiers).await;
        debug_assert_eq!(outcomes.len(), identifiers.len());

        let (succeeded, failed) = count_outcomes(&outcomes);
        summary.succeeded = succeeded;
        summary.failed = failed;

        for (identifier, outcome) in identifiers.iter().zip(&outcomes) {
            if let FetchOutcome::Failure(reason) = outcome {
                summary.add_failure(identifier.clone(), reason.clone());
            }
        }

        let posts = extract_successes(outcomes);

        // Neither sink is touched when the run produced no successes
        if !posts.is_empty() {
            let store = PostStore::open(&self.config.storage.db_path).await?;
            let persisted = match store.upsert_all(&posts).await {
                Ok(rows) => rows,
                Err(e) => {
                    store.close().await;
                    return Err(e);
                }
            };
            store.close().await;
            summary.persisted = persisted;

            let exporter = CsvExporter::new(&self.config.export.csv_path);
            summary.exported = exporter.write_export(&posts)?;
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }
}
