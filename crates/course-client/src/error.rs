//! Client error type.

use thiserror::Error;

/// Failures returned by [`crate::CourseClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed or extended.
    #[error("invalid base URL {url:?}: {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why the URL was rejected.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered 404.
    #[error("not found: {message}")]
    NotFound {
        /// Server-provided message.
        message: String,
    },
    /// The server answered with another non-success status.
    #[error("server answered {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message.
        message: String,
    },
    /// The body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the error is a 404 from the server.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
