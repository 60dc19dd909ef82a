//! # EventSub Trigger
//!
//! Library half of the `eventsub-trigger` binary.
//!
//! This crate parses command line arguments, loads environment
//! configuration, and turns a trigger request into a mock EventSub payload
//! using the `eventsub-mock` catalog.

pub mod cli;
pub mod config;
pub mod logging;
pub mod trigger;

pub use cli::{Cli, Command, TopicsArgs, TriggerArgs};
pub use config::{LogFormat, TriggerConfig};

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum TriggerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The event could not be resolved.
    #[error(transparent)]
    Resolve(#[from] eventsub_mock::ResolveError),

    /// The payload could not be generated.
    #[error("Event error: {0}")]
    Event(#[from] eventsub_mock::EventError),

    /// The resolved event produced nothing for the transport.
    #[error("Event {event} produced no payload for transport {transport}")]
    NothingGenerated { event: String, transport: String },
}

impl From<eventsub_mock::ConfigError> for TriggerError {
    fn from(err: eventsub_mock::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
