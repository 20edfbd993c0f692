//! Application execution logic.
//!
//! Builds the gateway from validated configuration and sends exactly one
//! notification.

use thiserror::Error;

use pd_notify::config::ValidatedConfig;
use pd_notify::gateway::{Gateway, Options, PagerdutyGateway, Raw, Response};
use pd_notify::transport::{HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The gateway reported a failed notification.
    #[error("{gateway} notification failed: {message}")]
    Rejected {
        /// Gateway name
        gateway: &'static str,
        /// Failure reason reported by the gateway
        message: String,
    },
}

/// Sends the notification described by `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the notification
/// is not accepted.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<Response, RunError> {
    let client = ReqwestClient::with_connect_timeout(config.gateway.connect_timeout)
        .map_err(RunError::Client)?;
    let gateway = PagerdutyGateway::new(client, config.gateway);

    deliver(&gateway, &config.to, &config.message, config.options).await
}

/// Sends one notification through `gateway` and turns a failed response into an error.
///
/// # Errors
///
/// Returns [`RunError::Rejected`] if the response reports failure.
pub async fn deliver<G: Gateway>(
    gateway: &G,
    to: &str,
    message: &str,
    options: Options,
) -> Result<Response, RunError> {
    tracing::info!("Sending {} notification for '{}'", gateway.name(), to);

    let response = gateway.notify(to, message, options).await;
    log_raw(response.raw());

    if response.success() {
        tracing::info!("{}", response.message());
        Ok(response)
    } else {
        Err(RunError::Rejected {
            gateway: gateway.name(),
            message: response.message().to_string(),
        })
    }
}

fn log_raw(raw: &Raw) {
    match raw {
        Raw::Empty => {}
        Raw::Json(value) => tracing::debug!("Provider payload: {value}"),
        Raw::Bytes(bytes) => tracing::debug!(
            "Provider payload ({} bytes): {}",
            bytes.len(),
            String::from_utf8_lossy(bytes)
        ),
    }
}
