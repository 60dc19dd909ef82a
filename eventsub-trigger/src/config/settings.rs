use std::env;
use std::fmt;
use std::str::FromStr;

use eventsub_mock::{ConfigError, ResolverConfig};
use eventsub_shared::Transport;
use tracing::debug;

use crate::TriggerError;

/// Environment variable naming the default transport.
pub const TRANSPORT_ENV: &str = "EVENTSUB_TRANSPORT";

/// Environment variable selecting the [`LogFormat`].
pub const LOG_FORMAT_ENV: &str = "EVENTSUB_LOG_FORMAT";

/// How log lines written to stderr are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    const NAMES: [&'static str; 2] = ["pretty", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::invalid_value(LOG_FORMAT_ENV, s, &Self::NAMES)),
        }
    }
}

/// Settings read from the environment. Command line flags take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerConfig {
    /// Transport used when `--transport` is not given.
    pub transport: Transport,
    /// Log output format.
    pub log_format: LogFormat,
    /// Resolver settings for the engine.
    pub resolver: ResolverConfig,
}

impl TriggerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EVENTSUB_TRANSPORT`: default transport (default: webhook)
    /// - `EVENTSUB_LOG_FORMAT`: `pretty` or `json` (default: pretty)
    /// - `EVENTSUB_ALIAS_MODE`: `sequential` or `normalized` (default: sequential)
    pub fn from_env() -> Result<Self, TriggerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TriggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport = match value(TRANSPORT_ENV) {
            Some(raw) => raw.parse().map_err(|_| {
                ConfigError::invalid_value(TRANSPORT_ENV, raw.as_str(), &["webhook", "websocket"])
            })?,
            None => Transport::default(),
        };

        let log_format = match value(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let resolver = ResolverConfig::from_lookup(&lookup)?;

        let config = Self {
            transport,
            log_format,
            resolver,
        };
        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}
