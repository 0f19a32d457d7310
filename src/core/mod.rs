//! Core business logic for postfetch.
//!
//! # Modules
//!
//! - [`aggregate`] - Pure success filtering and outcome counting
//! - [`pipeline`] - Run orchestration and summary reporting
//!
//! # Pipeline Workflow
//!
//! One run of the pipeline:
//!
//! 1. **Fetch**: dispatch the identifier batch concurrently (bounded
//!    in-flight cap), collecting one outcome per identifier in input order
//! 2. **Aggregate**: filter successful payloads, derive failure counts
//! 3. **Persist**: batch-upsert complete payloads into the SQLite table
//! 4. **Export**: overwrite the CSV file with the run's payloads
//! 5. **Report**: log and return a [`pipeline::RunSummary`]
//!
//! The two sinks are independent; there is no shared transaction between
//! them, and neither is touched when a run produces zero successes.

pub mod aggregate;
pub mod pipeline;
