//! Error types for mock event resolution and generation.

mod config_error;
mod event_error;
mod resolve_error;

pub use config_error::ConfigError;
pub use event_error::EventError;
pub use resolve_error::ResolveError;
