//! Error types for the search client.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while talking to the search service.
///
/// The controller collapses all of these to the same user-visible "no
/// results" outcome; the variants exist so operator-side logs can tell a
/// dead network from a bad payload.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("search service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
