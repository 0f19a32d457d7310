//! Relational sink (SQLite)

pub mod store;

pub use store::{PersistedPost, PostStore};
