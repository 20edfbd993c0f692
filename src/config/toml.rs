//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use crate::gateway::Options;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Gateway connection settings
    #[serde(default)]
    pub pagerduty: PagerdutySection,

    /// Notification defaults
    #[serde(default)]
    pub notification: NotificationSection,

    /// Default gateway options, applied unless the CLI sets the same key
    #[serde(default)]
    pub options: Options,
}

/// Gateway connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerdutySection {
    /// Default service key
    pub token: Option<String>,

    /// Endpoint template containing `{version}`
    pub endpoint: Option<String>,

    /// API version
    pub version: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,
}

/// Notification defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationSection {
    /// Default incident key
    pub to: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# pd-notify Configuration File

[pagerduty]
# Default service key (integration key), overridden by --token
# token = "0123456789abcdef0123456789abcdef"

# Endpoint template, {version} is replaced by the API version
# endpoint = "https://events.pagerduty.com/generic/{version}"
# version = "2010-04-15"

# Request timeout in seconds (default: 80)
# timeout = 80

# Connect timeout in seconds (default: 30)
# connect_timeout = 30

[notification]
# Default incident key, overridden by --to
# to = "db-primary"

[options]
# Default gateway options, overridden by CLI flags and --option
# event_type = "trigger"
# client = "nagios"
# client_url = "https://nagios.example.com"
# details = '{"team": "storage"}'
"#
    .to_string()
}
