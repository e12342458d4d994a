//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Catchpoint client.
///
/// Every operation either returns the decoded JSON payload or exactly one of
/// these; nothing is retried or recovered internally.
#[derive(Error, Debug)]
pub enum Error {
    /// A credential was missing or empty at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A request parameter was missing or malformed. Raised before any
    /// network traffic happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request could not be completed (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}
