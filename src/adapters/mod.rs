//! External system integrations for postfetch.
//!
//! - [`http`] - Remote resource fetching over HTTP
//! - [`sqlite`] - Relational sink (SQLite, idempotent upsert)
//! - [`csv_export`] - Tabular sink (CSV, full overwrite per run)
//!
//! The two sinks are deliberately independent: no shared transaction, and
//! the persistence layer is only ever touched after all fetch work has
//! completed, so no cross-adapter locking is needed within a run.

pub mod csv_export;
pub mod http;
pub mod sqlite;
