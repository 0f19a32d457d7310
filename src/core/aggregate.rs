//! Success aggregation
//!
//! Pure functions over the ordered outcome set. This is the single gate
//! between fetching and both sinks: everything persisted or exported in a
//! run passed through [`extract_successes`].

use crate::domain::{FetchOutcome, Post};

/// Order-preserving filter keeping only successful payloads
pub fn extract_successes(outcomes: Vec<FetchOutcome>) -> Vec<Post> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            FetchOutcome::Success(post) => Some(post),
            FetchOutcome::Failure(_) => None,
        })
        .collect()
}

/// Derive success and failure counts from an outcome set
///
/// The failure count is derived, not separately tracked; the two always
/// sum to the batch size.
pub fn count_outcomes(outcomes: &[FetchOutcome]) -> (usize, usize) {
    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    (succeeded, outcomes.len() - succeeded)
}
