//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration key held a value outside its accepted set.
    #[error("Invalid value for {key}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}
