//! Configuration types shared by the library and the CLI.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DOH_ENDPOINT, DEFAULT_MY_IP_PRIMARY, DEFAULT_MY_IP_SECONDARY, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MY_IP_CACHE_TTL,
};

/// `--log-level` values, one per [`log::LevelFilter`] above `Off`.
#[allow(missing_docs)]
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// `--log-format` values.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored single-line records for a terminal
    Plain,
    /// One JSON object per record
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Every endpoint is configurable so that tests and self-hosted setups can
/// point the resolvers somewhere other than the public services.
///
/// # Examples
///
/// ```no_run
/// use netbar::Config;
///
/// let config = Config {
///     doh_endpoint: "https://dns.google/resolve".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// DNS-over-HTTPS JSON endpoint
    pub doh_endpoint: String,

    /// Primary public IP provider (IP and country)
    pub my_ip_primary: String,

    /// Secondary public IP provider (IP only)
    pub my_ip_secondary: String,

    /// How long a public IP lookup is reused
    pub my_ip_ttl: Duration,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            my_ip_primary: DEFAULT_MY_IP_PRIMARY.to_string(),
            my_ip_secondary: DEFAULT_MY_IP_SECONDARY.to_string(),
            my_ip_ttl: MY_IP_CACHE_TTL,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
