//! Error types for the article API gateway.
//!
//! # Design
//! Screens surface every gateway failure as one generic message, so the
//! variants exist for logs and tests rather than for branching in the UI.
//! A 404 is an ordinary `Status` error here: "article not found" is decided
//! client-side by looking the id up in the fetched collection.

use thiserror::Error;

/// Errors returned by the gateway and by `ArticleClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ApiError::Status {
                status,
                body: String::new(),
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}
