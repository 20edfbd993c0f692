//! Notification gateways.
//!
//! A gateway turns a provider-neutral request (recipient, message, option
//! bag) into one provider API call and reports the outcome as a uniform
//! [`Response`]. This module provides:
//! - The shared contract ([`Gateway`])
//! - The result type ([`Response`], [`Raw`], [`map_response`])
//! - The option bag and its resolution helper ([`Options`])
//! - JSON-over-HTTP plumbing shared by providers ([`HttpGateway`])
//! - The PagerDuty events gateway ([`PagerdutyGateway`])

mod error;
mod http_gateway;
pub mod options;
mod pagerduty;
mod response;


pub use error::GatewayError;
pub use http_gateway::{HttpGateway, VERSION_PLACEHOLDER};
pub use options::Options;
pub use pagerduty::{
    API_VERSION, CREATE_EVENT_PATH, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT,
    DEFAULT_INCIDENT_KEY, DEFAULT_TIMEOUT, Event, EventType, INCORRECT_REQUEST, INVALID_SERVICE,
    PagerdutyConfig, PagerdutyGateway, interpret,
};
pub use response::{MESSAGE_SENT, OPERATION_FAILED, Raw, Response, map_response};

/// Contract shared by every notification provider.
///
/// Callers stay generic over `G: Gateway` and can swap providers freely.
/// `notify` never fails: provider rejections, transport errors, and local
/// configuration problems all come back as a failed [`Response`].
pub trait Gateway: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Sends `message` to `to`, making at most one provider call.
    ///
    /// `to` is stored in `options` under [`options::key::TO`], replacing any
    /// value the caller put there.
    fn notify(
        &self,
        to: &str,
        message: &str,
        options: Options,
    ) -> impl std::future::Future<Output = Response> + Send;
}
