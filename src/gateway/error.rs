//! Error types for gateway operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Local failures raised before or while committing a request.
///
/// Provider rejections are not errors: they arrive as an HTTP status and are
/// reported through a failed [`Response`](super::Response). Every variant here
/// is converted into a failed response at the gateway boundary as well, so a
/// caller of [`Gateway::notify`](super::Gateway::notify) only ever sees a
/// [`Response`](super::Response).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Neither the `token` option nor the configured default token is set.
    #[error("Missing service key: pass a `token` option or configure a default token")]
    MissingToken,

    /// The `event_type` option names an unknown event type.
    #[error("Invalid event type '{0}': expected trigger, acknowledge, or resolve")]
    InvalidEventType(String),

    /// The endpoint could not be turned into a valid URL.
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL after version substitution
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The transport failed before a status code was received.
    #[error(transparent)]
    Transport(#[from] HttpError),
}
