//! Uniform notification result shared by all gateways.

use serde_json::Value;

use super::GatewayError;

/// Message reported for every successful notification.
pub const MESSAGE_SENT: &str = "Message sent";

/// Message reported when a failure carries no reason of its own.
pub const OPERATION_FAILED: &str = "Operation failed";

/// Payload returned by the provider, kept for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Raw {
    /// No payload: empty body, or the request was never sent.
    #[default]
    Empty,
    /// Body that decoded as JSON.
    Json(Value),
    /// Body that is not JSON.
    Bytes(Vec<u8>),
}

impl Raw {
    /// Classifies a response body.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return Self::Empty;
        }

        serde_json::from_slice(body).map_or_else(|_| Self::Bytes(body.to_vec()), Self::Json)
    }

    /// Returns the JSON payload, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if there is no payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Outcome of a single `notify` call.
///
/// Built once per call by [`map_response`] and never modified afterwards;
/// fields are only reachable through accessors. The message is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    success: bool,
    message: String,
    raw: Raw,
}

impl Response {
    /// Returns true if the provider accepted the notification.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Human-readable outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Provider payload.
    #[must_use]
    pub const fn raw(&self) -> &Raw {
        &self.raw
    }

    /// Consumes the response, returning the provider payload.
    #[must_use]
    pub fn into_raw(self) -> Raw {
        self.raw
    }
}

impl From<GatewayError> for Response {
    fn from(error: GatewayError) -> Self {
        map_response(false, Some(error.to_string()), Raw::Empty)
    }
}

/// Builds a [`Response`] from an interpreted outcome.
///
/// On success the message is always [`MESSAGE_SENT`] and `error` is ignored.
/// On failure it is `error`, or [`OPERATION_FAILED`] when `error` is missing
/// or blank.
#[must_use]
pub fn map_response(success: bool, error: Option<String>, raw: Raw) -> Response {
    let message = if success {
        MESSAGE_SENT.to_string()
    } else {
        error
            .filter(|reason| !reason.trim().is_empty())
            .unwrap_or_else(|| OPERATION_FAILED.to_string())
    };

    Response {
        success,
        message,
        raw,
    }
}
