//! PagerDuty generic events API (v1) gateway.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::{HttpClient, HttpResponse};

use super::http_gateway::HttpGateway;
use super::options::key;
use super::response::{Raw, Response, map_response};
use super::{Gateway, GatewayError, Options};

/// Endpoint template of the generic events API.
pub const DEFAULT_ENDPOINT: &str = "https://events.pagerduty.com/generic/{version}";

/// API version substituted into the endpoint.
pub const API_VERSION: &str = "2010-04-15";

/// Path of the event creation call below the versioned endpoint.
pub const CREATE_EVENT_PATH: &str = "create_event.json";

/// Incident key used when no recipient is available.
pub const DEFAULT_INCIDENT_KEY: &str = "pd-notify";

/// Default overall request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Default connection establishment timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reported for HTTP 404.
pub const INVALID_SERVICE: &str = "Invalid service.";

/// Reported for HTTP 400.
pub const INCORRECT_REQUEST: &str = "Incorrect request values.";

/// Static configuration of a [`PagerdutyGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerdutyConfig {
    /// Service key used when the caller passes no `token` option.
    pub token: Option<String>,
    /// Endpoint template containing `{version}`.
    pub endpoint: String,
    /// API version substituted into `endpoint`.
    pub version: String,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

impl PagerdutyConfig {
    /// Configuration for the public API with the given default token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

impl Default for PagerdutyConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            version: API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Incident lifecycle action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Open an incident, or append to the open one with the same key.
    #[default]
    Trigger,
    /// Acknowledge the incident.
    Acknowledge,
    /// Resolve the incident.
    Resolve,
}

impl EventType {
    /// Wire name of the event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Acknowledge => "acknowledge",
            Self::Resolve => "resolve",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trigger" => Ok(Self::Trigger),
            "acknowledge" => Ok(Self::Acknowledge),
            "resolve" => Ok(Self::Resolve),
            _ => Err(GatewayError::InvalidEventType(s.to_string())),
        }
    }
}

/// Body of a `create_event.json` call.
///
/// Unset optional fields are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Integration key of the target service.
    pub service_key: String,
    /// Correlates events belonging to the same incident.
    pub incident_key: String,
    /// Lifecycle action.
    pub event_type: EventType,
    /// Name of the monitoring client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// URL of the monitoring client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,
    /// Arbitrary details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Incident summary.
    pub description: String,
}

impl Event {
    /// Builds the event for `message` from resolved options.
    ///
    /// `details` holding valid JSON text is embedded as JSON; anything else
    /// is sent as a string.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingToken`] when neither the `token` option
    /// nor `default_token` is set, and [`GatewayError::InvalidEventType`] for
    /// an unknown `event_type`.
    pub fn from_options(
        message: &str,
        options: &Options,
        default_token: Option<&str>,
    ) -> Result<Self, GatewayError> {
        let service_key = options
            .resolve_or(key::TOKEN, default_token)
            .ok_or(GatewayError::MissingToken)?;

        let event_type: EventType = options
            .resolve(key::EVENT_TYPE, EventType::Trigger.as_str())
            .parse()?;

        Ok(Self {
            service_key: service_key.to_string(),
            incident_key: options.resolve(key::TO, DEFAULT_INCIDENT_KEY).to_string(),
            event_type,
            client: options.resolve_or(key::CLIENT, None).map(str::to_string),
            client_url: options.resolve_or(key::CLIENT_URL, None).map(str::to_string),
            details: options.resolve_or(key::DETAILS, None).map(parse_details),
            description: message.to_string(),
        })
    }
}

fn parse_details(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Error body returned by the events API, e.g.
/// `{"status":"invalid event","message":"Event object is invalid","errors":["..."]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<String>,
}

impl ErrorBody {
    fn describe(self) -> String {
        if self.errors.is_empty() {
            self.message
        } else {
            format!("{}: {}", self.message, self.errors.join("; "))
        }
    }
}

/// Gateway for the PagerDuty generic events API.
///
/// # Example
///
/// ```no_run
/// use pd_notify::gateway::{Gateway, Options, PagerdutyConfig, PagerdutyGateway};
/// use pd_notify::transport::ReqwestClient;
///
/// # async fn example() {
/// let gateway = PagerdutyGateway::new(
///     ReqwestClient::new(),
///     PagerdutyConfig::with_token("0123456789abcdef0123456789abcdef"),
/// );
/// let response = gateway
///     .notify("db-primary", "Replication lag above 30s", Options::new())
///     .await;
/// println!("{}", response.message());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PagerdutyGateway<H> {
    http: HttpGateway<H>,
    token: Option<String>,
}

impl<H> PagerdutyGateway<H> {
    /// Creates a gateway; the configuration is not validated here.
    #[must_use]
    pub fn new(client: H, config: PagerdutyConfig) -> Self {
        let PagerdutyConfig {
            token,
            endpoint,
            version,
            timeout,
            connect_timeout,
        } = config;

        Self {
            http: HttpGateway::new(client, endpoint, version, timeout, connect_timeout),
            token,
        }
    }

    /// Returns the HTTP helper.
    #[must_use]
    pub const fn http(&self) -> &HttpGateway<H> {
        &self.http
    }
}

impl<H: HttpClient> PagerdutyGateway<H> {
    async fn send_event(&self, message: &str, options: &Options) -> Result<Response, GatewayError> {
        let event = Event::from_options(message, options, self.token.as_deref())?;
        let url = self.http.build_url(CREATE_EVENT_PATH)?;

        tracing::debug!(
            incident_key = %event.incident_key,
            event_type = %event.event_type,
            "Sending PagerDuty event"
        );

        let response = self.http.commit(http::Method::POST, url, &event).await?;

        Ok(interpret(&response))
    }
}

impl<H: HttpClient> Gateway for PagerdutyGateway<H> {
    fn name(&self) -> &'static str {
        "pagerduty"
    }

    async fn notify(&self, to: &str, message: &str, mut options: Options) -> Response {
        options.insert(key::TO, to);

        match self.send_event(message, &options).await {
            Ok(response) => {
                if !response.success() {
                    tracing::warn!("PagerDuty rejected the event: {}", response.message());
                }
                response
            }
            Err(e) => {
                tracing::warn!("PagerDuty event not delivered: {e}");
                Response::from(e)
            }
        }
    }
}

/// Maps a provider answer onto a [`Response`].
///
/// Only 200 counts as success; its body is ignored apart from being kept
/// as the raw payload.
#[must_use]
pub fn interpret(response: &HttpResponse) -> Response {
    let raw = Raw::from_body(&response.body);

    match response.status {
        http::StatusCode::OK => map_response(true, None, raw),
        http::StatusCode::NOT_FOUND => map_response(false, Some(INVALID_SERVICE.to_string()), raw),
        http::StatusCode::BAD_REQUEST => {
            map_response(false, Some(INCORRECT_REQUEST.to_string()), raw)
        }
        _ => map_response(false, Some(error_message(response)), raw),
    }
}

fn error_message(response: &HttpResponse) -> String {
    serde_json::from_slice::<ErrorBody>(&response.body).map_or_else(
        |_| {
            format!(
                "API response not valid. (Raw response: {})",
                response.body_lossy()
            )
        },
        ErrorBody::describe,
    )
}
