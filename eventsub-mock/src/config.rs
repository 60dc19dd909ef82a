//! Configuration types for trigger resolution.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Environment variable selecting the [`AliasMode`].
pub const ALIAS_MODE_ENV: &str = "EVENTSUB_ALIAS_MODE";

/// How topic strings passed as triggers are rewritten to trigger names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasMode {
    /// Check each descriptor's alias as the catalog is scanned. A hit
    /// replaces the search trigger for the rest of the scan.
    #[default]
    Sequential,
    /// Rewrite the trigger once, before scanning, using the first descriptor
    /// in catalog order that knows the topic.
    Normalized,
}

impl AliasMode {
    const NAMES: [&'static str; 2] = ["sequential", "normalized"];

    /// The configuration name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasMode::Sequential => "sequential",
            AliasMode::Normalized => "normalized",
        }
    }
}

impl fmt::Display for AliasMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AliasMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(AliasMode::Sequential),
            "normalized" => Ok(AliasMode::Normalized),
            _ => Err(ConfigError::invalid_value(ALIAS_MODE_ENV, s, &Self::NAMES)),
        }
    }
}

/// Configuration for a [`Catalog`](crate::Catalog)'s resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    /// Alias rewrite policy.
    pub alias_mode: AliasMode,
}

impl ResolverConfig {
    /// Set the alias rewrite policy.
    pub fn with_alias_mode(mut self, alias_mode: AliasMode) -> Self {
        self.alias_mode = alias_mode;
        self
    }

    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EVENTSUB_ALIAS_MODE`: `sequential` (default) or `normalized`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let alias_mode = match lookup(ALIAS_MODE_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => AliasMode::default(),
        };
        Ok(Self { alias_mode })
    }
}
