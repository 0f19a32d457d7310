//! CSV exporter for fetched posts
//!
//! The export file is the full, current output of one run, not an append
//! log: each run replaces its entire contents. Unlike the relational sink,
//! this sink does not re-validate completeness - a payload missing a field
//! produces an empty cell for that column, keeping an audit trail of what
//! the remote actually returned.

use crate::domain::{Post, PostFetchError, Result};
use std::path::{Path, PathBuf};

/// Column header, in payload field order
const HEADER: [&str; 4] = ["id", "ownerId", "title", "body"];

/// Tabular sink writing one run's payloads to a CSV file
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Create an exporter targeting the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The export target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full payload set, overwriting any prior content
    ///
    /// Writes the fixed four-column header followed by one row per payload
    /// in the given order. Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns an export error if the file cannot be created or written.
    pub fn write_export(&self, posts: &[Post]) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PostFetchError::Export(format!(
                        "Failed to create export directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| PostFetchError::Export(format!("Failed to open export file: {e}")))?;

        writer
            .write_record(HEADER)
            .map_err(|e| PostFetchError::Export(format!("Failed to write header: {e}")))?;

        for post in posts {
            writer
                .write_record([
                    post.id.map(|v| v.to_string()).unwrap_or_default(),
                    post.owner_id.map(|v| v.to_string()).unwrap_or_default(),
                    post.title.clone().unwrap_or_default(),
                    post.body.clone().unwrap_or_default(),
                ])
                .map_err(|e| PostFetchError::Export(format!("Failed to write row: {e}")))?;
        }

        writer
            .flush()
            .map_err(|e| PostFetchError::Export(format!("Failed to flush export file: {e}")))?;

        tracing::info!(
            rows = posts.len(),
            path = %self.path.display(),
            "Posts saved to CSV"
        );
        Ok(posts.len())
    }
}
