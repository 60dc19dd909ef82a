//! # EventSub Shared
//!
//! Shared types for the EventSub mock toolkit.
//!
//! This crate holds the data that flows between the resolution engine
//! (`eventsub-mock`) and its callers:
//!
//! - [`Transport`]: the delivery mechanisms a mock event can be shaped for.
//! - [`MockEventParameters`]: the request a caller hands to a descriptor.
//! - [`MockEventResponse`]: the serialized payload plus envelope metadata.
//! - [`models`]: the EventSub envelope (`subscription` + optional `event`).

pub mod models;
mod params;
mod response;
mod transport;

pub use models::{EventsubCondition, EventsubResponse, EventsubSubscription, EventsubTransport};
pub use params::MockEventParameters;
pub use response::MockEventResponse;
pub use transport::{Transport, UnknownTransport, TRANSPORT_WEBHOOK, TRANSPORT_WEBSOCKET};

/// Subscription status that makes a payload carry its `event` body.
pub const STATUS_ENABLED: &str = "enabled";
