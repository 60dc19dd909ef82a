//! Transport identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire name of the webhook transport.
pub const TRANSPORT_WEBHOOK: &str = "webhook";

/// Wire name of the websocket transport.
pub const TRANSPORT_WEBSOCKET: &str = "websocket";

/// A delivery mechanism an event can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transport {
    /// HTTP callback delivery.
    #[default]
    #[serde(rename = "webhook")]
    Webhook,
    /// Delivery over a websocket session.
    #[serde(rename = "websocket")]
    WebSocket,
}

impl Transport {
    /// Every known transport, webhook first.
    pub const ALL: [Transport; 2] = [Transport::Webhook, Transport::WebSocket];

    /// The lowercase wire name of this transport.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Transport::Webhook => TRANSPORT_WEBHOOK,
            Transport::WebSocket => TRANSPORT_WEBSOCKET,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transport: {0}")]
pub struct UnknownTransport(pub String);

impl FromStr for Transport {
    type Err = UnknownTransport;

    /// Parses a transport name, ignoring ASCII case.
    ///
    /// Descriptor capability checks compare raw names exactly; this parser is
    /// meant for configuration values and command-line input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transport::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTransport(s.to_string()))
    }
}
