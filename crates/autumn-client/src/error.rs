//! Client error types.
//!
//! Only failures that leave no backend response to normalize are errors here.
//! Anything the backend answered, whatever the status, comes back as an
//! [`ApiResult`](autumn_core::ApiResult) instead.

/// Errors raised by the Autumn client.
#[derive(Debug, thiserror::Error)]
pub enum AutumnError {
    /// The client cannot be built: no credential, bad header or bad log level.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be completed (connection, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AutumnError {
    /// Returns `true` for construction-time configuration failures.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
