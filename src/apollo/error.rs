//! Error types for upstream Apollo API calls.
//!
//! The three failure classes are kept distinct all the way to the caller:
//! an HTTP status error carries the upstream status code and raw body, a
//! transport error covers DNS/connect/timeout failures, and everything else
//! is reported generically.

use thiserror::Error;

/// Errors produced by the upstream call adapter.
#[derive(Debug, Error)]
pub enum ApolloError {
    /// Upstream answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Status {
        /// HTTP status code returned by the upstream API.
        status: u16,
        /// Raw upstream error body.
        body: String,
    },

    /// The request never completed (DNS, connect, timeout, reset).
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    /// Anything else, including malformed upstream payloads.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result type alias for upstream operations.
pub type ApolloResult<T> = Result<T, ApolloError>;
