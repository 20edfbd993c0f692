//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::gateway::EventType;

/// pd-notify: send one event to PagerDuty
///
/// Triggers, acknowledges, or resolves an incident through the
/// PagerDuty generic events API.
#[derive(Debug, Parser)]
#[command(name = "pd-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Incident key the event belongs to (required for send mode)
    #[arg(long)]
    pub to: Option<String>,

    /// Event description (required for send mode)
    #[arg(long, short)]
    pub message: Option<String>,

    /// Service key, overrides the configured token
    #[arg(long)]
    pub token: Option<String>,

    /// Incident lifecycle action
    #[arg(long = "event-type", value_enum)]
    pub event_type: Option<EventTypeArg>,

    /// Name of the monitoring client
    #[arg(long)]
    pub client: Option<String>,

    /// URL of the monitoring client
    #[arg(long = "client-url")]
    pub client_url: Option<String>,

    /// Event details, JSON text or plain text
    #[arg(long)]
    pub details: Option<String>,

    /// Extra gateway option in 'key=value' format (can be specified multiple times)
    #[arg(long = "option", value_name = "K=V")]
    pub options: Vec<String>,

    /// Endpoint template, '{version}' is replaced by the API version
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    #[arg(long = "connect-timeout")]
    pub connect_timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for pd-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Event type argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventTypeArg {
    /// Open an incident
    Trigger,
    /// Acknowledge an incident
    Acknowledge,
    /// Resolve an incident
    Resolve,
}

impl From<EventTypeArg> for EventType {
    fn from(arg: EventTypeArg) -> Self {
        match arg {
            EventTypeArg::Trigger => Self::Trigger,
            EventTypeArg::Acknowledge => Self::Acknowledge,
            EventTypeArg::Resolve => Self::Resolve,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
