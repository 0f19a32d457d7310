//! Fetch outcome classification
//!
//! Every fetch attempt terminates in exactly one outcome: a successful
//! payload or a typed failure. The per-identifier state machine is
//! `Pending -> {Success | Failure(kind)}`, terminal on the first and only
//! attempt. No retries, no backward transitions.

use super::post::Post;
use std::fmt;

/// Classified result of one fetch attempt
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Status 200 with a JSON body that deserialized into a payload
    Success(Post),

    /// Any other result, captured as data rather than propagated
    Failure(FailureReason),
}

impl FetchOutcome {
    /// Whether this outcome carries a payload
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// Why a fetch attempt failed
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// The request exceeded the fixed per-request timeout
    Timeout,

    /// The server responded with a non-200 status
    HttpStatus(u16),

    /// Status 200 but the body was not JSON-typed
    UnexpectedContentType(String),

    /// Transport-level fault (DNS, connection refused, unreachable host)
    /// or a body that failed to decode despite the JSON content type
    Network(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "request timed out"),
            FailureReason::HttpStatus(code) => write!(f, "response status {code}"),
            FailureReason::UnexpectedContentType(content_type) => {
                write!(f, "expected JSON, got {content_type}")
            }
            FailureReason::Network(detail) => write!(f, "network error: {detail}"),
        }
    }
}
