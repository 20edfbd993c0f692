//! Shared plumbing for gateways that speak JSON over HTTP.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::transport::{HttpClient, HttpRequest, HttpResponse};

use super::GatewayError;

/// Placeholder replaced by the API version in endpoint templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// URL builder and request issuer held by provider gateways.
///
/// Owns the HTTP client, the versioned endpoint template, and the timeouts
/// attached to every request. Holds no per-call state, so one instance can
/// serve concurrent calls when `H` can.
#[derive(Debug, Clone)]
pub struct HttpGateway<H> {
    client: H,
    endpoint: String,
    version: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl<H> HttpGateway<H> {
    /// Creates the helper for an endpoint template such as
    /// `https://events.example.com/generic/{version}`.
    #[must_use]
    pub fn new(
        client: H,
        endpoint: impl Into<String>,
        version: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            version: version.into(),
            timeout,
            connect_timeout,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Endpoint with the version substituted in.
    #[must_use]
    pub fn request_url(&self) -> String {
        self.endpoint.replace(VERSION_PLACEHOLDER, &self.version)
    }

    /// Builds the full URL for `path` below the versioned endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] if the result is not a valid URL.
    pub fn build_url(&self, path: &str) -> Result<Url, GatewayError> {
        let base = self.request_url();
        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Url::parse(&url).map_err(|e| GatewayError::InvalidUrl {
            url,
            reason: e.to_string(),
        })
    }
}

impl<H: HttpClient> HttpGateway<H> {
    /// Sends `body` as JSON to `url` and returns whatever status comes back.
    ///
    /// Makes exactly one attempt.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Encode`] if `body` cannot be serialized and
    /// [`GatewayError::Transport`] if no response was received.
    pub async fn commit<T: Serialize + ?Sized>(
        &self,
        method: http::Method,
        url: Url,
        body: &T,
    ) -> Result<HttpResponse, GatewayError> {
        let request = HttpRequest::new(method, url)
            .with_json(body)?
            .with_timeout(self.timeout)
            .with_connect_timeout(self.connect_timeout);

        tracing::debug!("{} {}", request.method, request.url);

        let response = self.client.request(request).await?;

        tracing::debug!("Provider answered with status {}", response.status);

        Ok(response)
    }
}
