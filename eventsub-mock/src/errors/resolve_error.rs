//! Resolution error types.
//!
//! This module defines the errors returned when a (trigger, transport,
//! version) request does not map to exactly one event descriptor.

use thiserror::Error;

/// Errors that can occur while resolving a trigger to an event descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The trigger and transport matched, but no descriptor has the requested
    /// version, or no version was given and several exist.
    #[error(
        "Invalid version given. Valid version(s): {}{}",
        .valid_versions.join(", "),
        version_hint(.needs_version_hint)
    )]
    AmbiguousOrInvalidVersion {
        valid_versions: Vec<String>,
        needs_version_hint: bool,
    },

    /// Nothing matched on the websocket transport. The trigger may still
    /// exist for webhooks.
    #[error("Invalid event, or this event is not available via WebSockets.")]
    UnsupportedOnTransport { trigger: String },

    /// No descriptor recognizes the trigger on this transport.
    #[error("Invalid event")]
    UnknownEvent { trigger: String, transport: String },
}

fn version_hint(needs_version_hint: &bool) -> &'static str {
    if *needs_version_hint {
        "\nUse --version to specify"
    } else {
        ""
    }
}

impl ResolveError {
    /// Create a version error. Duplicate versions are collapsed, keeping
    /// first-seen order.
    pub fn invalid_version<I, S>(versions: I, needs_version_hint: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut valid_versions: Vec<String> = Vec::new();
        for version in versions {
            let version = version.into();
            if !valid_versions.contains(&version) {
                valid_versions.push(version);
            }
        }
        Self::AmbiguousOrInvalidVersion {
            valid_versions,
            needs_version_hint,
        }
    }

    /// Create a websocket-unsupported error.
    pub fn unsupported_on_transport(trigger: impl Into<String>) -> Self {
        Self::UnsupportedOnTransport {
            trigger: trigger.into(),
        }
    }

    /// Create an unknown event error.
    pub fn unknown_event(trigger: impl Into<String>, transport: impl Into<String>) -> Self {
        Self::UnknownEvent {
            trigger: trigger.into(),
            transport: transport.into(),
        }
    }
}
