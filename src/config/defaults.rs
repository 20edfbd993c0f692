//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::gateway;

/// Default endpoint template of the events API.
pub const ENDPOINT: &str = gateway::DEFAULT_ENDPOINT;

/// Default API version substituted into the endpoint.
pub const VERSION: &str = gateway::API_VERSION;

/// Default overall request timeout in seconds.
pub const TIMEOUT_SECS: u64 = gateway::DEFAULT_TIMEOUT.as_secs();

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = gateway::DEFAULT_CONNECT_TIMEOUT.as_secs();

/// Default config file name written by `init`.
pub const CONFIG_FILE: &str = "pd-notify.toml";
