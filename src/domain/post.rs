//! Post payload model
//!
//! A payload is expected to contain four named fields: `id`, `ownerId`,
//! `title`, `body`. All fields are optional at the type level because the
//! remote may return partial objects; completeness is checked explicitly
//! before relational persistence.

use serde::{Deserialize, Serialize};

/// Structured record returned for one identifier
///
/// A payload is "complete" iff all four fields are present. Incomplete
/// payloads never reach the relational sink, but the CSV export accepts
/// them with blank cells (see the sink modules for the asymmetry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Primary key of the post
    pub id: Option<i64>,

    /// Owner of the post
    #[serde(rename = "ownerId")]
    pub owner_id: Option<i64>,

    /// Post title
    pub title: Option<String>,

    /// Post body text
    pub body: Option<String>,
}

impl Post {
    /// Whether all four required fields are present
    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.owner_id.is_some() && self.title.is_some() && self.body.is_some()
    }
}
