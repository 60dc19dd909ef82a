//! Environment configuration for the trigger binary.

mod settings;

pub use settings::{LogFormat, TriggerConfig, LOG_FORMAT_ENV, TRANSPORT_ENV};
