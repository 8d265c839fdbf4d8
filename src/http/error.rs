//! Forwarding error taxonomy.

use thiserror::Error;

/// Errors that abort a single forwarding invocation.
///
/// None of these are retried. An upstream response with a non-2xx status is
/// not an error and is copied through as a normal reply.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The outbound request could not be constructed.
    #[error("failed to build outbound request: {0}")]
    RequestConstruction(#[from] BuildError),

    /// The outbound request could not be sent or no response arrived.
    #[error("outbound dispatch failed: {0}")]
    Dispatch(#[source] reqwest::Error),

    /// A response arrived but its body could not be read in full.
    #[error("failed to read outbound response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

impl ForwardError {
    /// Pipeline stage the invocation failed in.
    pub fn stage(&self) -> &'static str {
        match self {
            ForwardError::RequestConstruction(_) => "build",
            ForwardError::Dispatch(_) => "dispatch",
            ForwardError::ReadBody(_) => "read-body",
        }
    }
}

/// Reasons an inbound request cannot be turned into an outbound one.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {0:?}")]
    InvalidHeaderValue(String),

    /// Rejected by the HTTP client (bad URL, client initialization).
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Result type for forwarding operations.
pub type ForwardResult<T> = Result<T, ForwardError>;
