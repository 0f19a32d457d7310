//! Domain models and types for postfetch.
//!
//! This module contains the core domain models and business rules:
//!
//! - **Identifiers** ([`ResourceId`]) - opaque keys addressing one remote resource
//! - **Payloads** ([`Post`]) - the structured record returned for one identifier
//! - **Outcomes** ([`FetchOutcome`], [`FailureReason`]) - the classified result
//!   of one fetch attempt
//! - **Errors** ([`PostFetchError`]) and the [`Result`] alias
//!
//! # Outcomes are data
//!
//! A fetch attempt never raises; it classifies. Exactly one [`FetchOutcome`]
//! exists per identifier, produced exactly once:
//!
//! ```rust
//! use postfetch::domain::{FailureReason, FetchOutcome};
//!
//! let outcome = FetchOutcome::Failure(FailureReason::HttpStatus(404));
//! assert!(!outcome.is_success());
//! ```

pub mod errors;
pub mod ids;
pub mod outcome;
pub mod post;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::PostFetchError;
pub use ids::ResourceId;
pub use outcome::{FailureReason, FetchOutcome};
pub use post::Post;
pub use result::Result;
