//! SQLite post store
//!
//! Validates payload shape and performs idempotent batch upserts into the
//! `posts` table. The store is acquired at the start of a run and released
//! at the end; nothing here outlives a run except the database file itself.

use crate::domain::{Post, PostFetchError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use sqlx::FromRow;
use std::path::Path;
use std::str::FromStr;

/// Row as persisted in the `posts` table
///
/// Unlike [`Post`], all fields are present: only complete payloads are
/// ever accepted by the store.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PersistedPost {
    /// Primary key
    pub id: i64,
    /// Owner of the post
    pub owner_id: i64,
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
}

/// Relational sink keyed by post id
pub struct PostStore {
    pool: SqlitePool,
}

impl PostStore {
    /// Open the store, creating the database file and schema if absent
    ///
    /// Connects with WAL journal mode and ensures the `posts` table exists.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the database cannot be opened or the
    /// schema cannot be created.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    PostFetchError::Storage(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))
            .map_err(|e| {
                PostFetchError::Storage(format!("Failed to parse database path: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePool::connect_with(options).await.map_err(|e| {
            PostFetchError::Storage(format!("Failed to connect to database: {e}"))
        })?;

        let store = Self { pool };
        store.ensure_schema().await?;

        Ok(store)
    }

    /// Create the `posts` table if it does not exist
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY,
                owner_id INTEGER,
                title TEXT,
                body TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| PostFetchError::Storage(format!("Failed to create schema: {e}")))?;

        Ok(())
    }

    /// Upsert a batch of payloads in a single transaction
    ///
    /// Incomplete payloads are skipped with a warning, not an error. Each
    /// accepted row replaces any existing row with the same id
    /// (last-write-wins within a batch). Any storage failure aborts the
    /// whole batch and propagates; nothing is committed in that case.
    ///
    /// Returns the number of rows accepted.
    pub async fn upsert_all(&self, posts: &[Post]) -> Result<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| PostFetchError::Storage(format!("Failed to begin transaction: {e}")))?;

        let mut accepted = 0usize;
        for post in posts {
            if !post.is_complete() {
                tracing::warn!(id = ?post.id, "Skipping incomplete payload");
                continue;
            }

            sqlx::query(
                "INSERT OR REPLACE INTO posts (id, owner_id, title, body) VALUES (?, ?, ?, ?)",
            )
            .bind(post.id)
            .bind(post.owner_id)
            .bind(post.title.as_deref())
            .bind(post.body.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(|e| PostFetchError::Storage(format!("Failed to upsert post: {e}")))?;

            accepted += 1;
        }

        tx.commit()
            .await
            .map_err(|e| PostFetchError::Storage(format!("Failed to commit batch: {e}")))?;

        tracing::info!(rows = accepted, "Posts saved to database");
        Ok(accepted)
    }

    /// Fetch one persisted row by id
    pub async fn get(&self, id: i64) -> Result<Option<PersistedPost>> {
        sqlx::query_as::<_, PersistedPost>(
            "SELECT id, owner_id, title, body FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostFetchError::Storage(format!("Failed to fetch post: {e}")))
    }

    /// Count persisted rows
    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| PostFetchError::Storage(format!("Failed to count posts: {e}")))
    }

    /// Close the underlying connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
