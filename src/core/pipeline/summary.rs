//! Run summary and reporting
//!
//! Tracks what one pipeline run attempted and what actually landed in each
//! sink. Fetch failures are recorded per identifier; sink failures never
//! appear here because they abort the run before a summary is produced.

use crate::domain::{FailureReason, ResourceId};
use std::time::Duration;

/// One failed fetch, with the identifier it was attempted for
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// Identifier the request was built from
    pub identifier: ResourceId,

    /// Classified failure reason
    pub reason: FailureReason,
}

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of identifiers in the batch
    pub attempted: usize,

    /// Number of successful fetches
    pub succeeded: usize,

    /// Number of failed fetches (derived: attempted - succeeded)
    pub failed: usize,

    /// Rows accepted by the relational sink (complete payloads only)
    pub persisted: usize,

    /// Rows written to the CSV export (every successful payload)
    pub exported: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Per-identifier fetch failures
    pub failures: Vec<FetchFailure>,
}

impl RunSummary {
    /// Create a new empty run summary
    pub fn new() -> Self {
        Self {
            attempted: 0,
            succeeded: 0,
            failed: 0,
            persisted: 0,
            exported: 0,
            duration: Duration::from_secs(0),
            failures: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a failed fetch
    pub fn add_failure(&mut self, identifier: ResourceId, reason: FailureReason) {
        self.failures.push(FetchFailure { identifier, reason });
    }

    /// Whether every fetch in the batch succeeded
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 100.0;
        }
        (self.succeeded as f64 / self.attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            attempted = self.attempted,
            succeeded = self.succeeded,
            failed = self.failed,
            persisted = self.persisted,
            exported = self.exported,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Run completed"
        );

        for failure in &self.failures {
            tracing::warn!(
                identifier = %failure.identifier,
                reason = %failure.reason,
                "Fetch failure"
            );
        }
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
