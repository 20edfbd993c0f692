//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::gateway::options::key;
use crate::gateway::{EventType, Options, PagerdutyConfig, VERSION_PLACEHOLDER};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Gateway settings
    pub gateway: PagerdutyConfig,

    /// Incident key (required)
    pub to: String,

    /// Event description (required)
    pub message: String,

    /// Gateway options sent with the notification
    pub options: Options,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.gateway.token.is_some() {
            "set"
        } else {
            "unset"
        };

        write!(
            f,
            "Config {{ endpoint: {}, version: {}, token: {}, timeout: {}s, connect_timeout: {}s, \
             to: {}, options: {} }}",
            self.gateway.endpoint,
            self.gateway.version,
            token,
            self.gateway.timeout.as_secs(),
            self.gateway.connect_timeout.as_secs(),
            self.to,
            self.options.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`to`, `message`)
    /// - The endpoint is not a valid URL
    /// - A timeout is zero
    /// - An option is malformed or names an unknown event type
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let to = Self::resolve_to(cli, toml)?;

        let message = cli.message.clone().ok_or_else(|| {
            ConfigError::missing(field::MESSAGE, "Use --message to describe the event")
        })?;

        let gateway = Self::build_gateway(cli, toml)?;

        let options = Self::resolve_options(cli, toml)?;

        Ok(Self {
            gateway,
            to,
            message,
            options,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_to(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.to
            .clone()
            .or_else(|| toml.and_then(|t| t.notification.to.clone()))
            .ok_or_else(|| {
                ConfigError::missing(field::TO, "Use --to or set notification.to in config file")
            })
    }

    fn build_gateway(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<PagerdutyConfig, ConfigError> {
        let section = toml.map(|t| &t.pagerduty);

        let token = cli
            .token
            .clone()
            .or_else(|| section.and_then(|s| s.token.clone()));

        // Priority: CLI explicit > TOML > default
        let endpoint = cli
            .endpoint
            .clone()
            .or_else(|| section.and_then(|s| s.endpoint.clone()))
            .unwrap_or_else(|| defaults::ENDPOINT.to_string());

        let version = section
            .and_then(|s| s.version.clone())
            .unwrap_or_else(|| defaults::VERSION.to_string());

        validate_endpoint(&endpoint, &version)?;

        let timeout = resolve_duration(
            "timeout",
            cli.timeout,
            section.and_then(|s| s.timeout),
            defaults::TIMEOUT_SECS,
        )?;

        let connect_timeout = resolve_duration(
            "connect_timeout",
            cli.connect_timeout,
            section.and_then(|s| s.connect_timeout),
            defaults::CONNECT_TIMEOUT_SECS,
        )?;

        Ok(PagerdutyConfig {
            token,
            endpoint,
            version,
            timeout,
            connect_timeout,
        })
    }

    fn resolve_options(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Options, ConfigError> {
        let mut options = Options::new();

        for option_str in &cli.options {
            let (name, value) = parse_option_string(option_str)?;
            options.insert(name, value);
        }

        // Dedicated flags win over --option
        if let Some(event_type) = cli.event_type {
            options.insert(key::EVENT_TYPE, EventType::from(event_type).as_str());
        }
        if let Some(ref client) = cli.client {
            options.insert(key::CLIENT, client.as_str());
        }
        if let Some(ref client_url) = cli.client_url {
            options.insert(key::CLIENT_URL, client_url.as_str());
        }
        if let Some(ref details) = cli.details {
            options.insert(key::DETAILS, details.as_str());
        }

        if let Some(toml) = toml {
            options.merge_defaults(&toml.options);
        }

        // --token wins over any token option
        if cli.token.is_some() {
            options.remove(key::TOKEN);
        }

        if let Some(event_type) = options.get(key::EVENT_TYPE) {
            event_type
                .parse::<EventType>()
                .map_err(ConfigError::InvalidEventType)?;
        }

        Ok(options)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn validate_endpoint(endpoint: &str, version: &str) -> Result<(), ConfigError> {
    let url = endpoint.replace(VERSION_PLACEHOLDER, version);

    Url::parse(&url).map_err(|e| ConfigError::InvalidEndpoint {
        url: url.clone(),
        reason: e.to_string(),
    })?;

    Ok(())
}

fn resolve_duration(
    field: &'static str,
    cli: Option<u64>,
    toml: Option<u64>,
    default: u64,
) -> Result<Duration, ConfigError> {
    let seconds = cli.or(toml).unwrap_or(default);

    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

fn parse_option_string(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::InvalidOption {
            value: s.to_string(),
        }),
    }
}
