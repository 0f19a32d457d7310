//! Strongly-typed resource identifiers

use std::fmt;

/// Key addressing one remote resource
///
/// The request URL for an identifier is the configured base URL with the
/// identifier appended. Identifiers are opaque: a numeric range produces
/// numeric keys, while the fault-injection set uses raw URL strings with an
/// empty base URL. Batches are ordered sequences; duplicates are permitted
/// and order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new resource identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
