//! Mock EventSub event generation for testing.
//!
//! This crate holds the catalog of mock event types a developer can trigger,
//! resolves a requested trigger to exactly one of them, and renders the
//! notification payload that type would produce.
//!
//! # Architecture
//!
//! ```text
//! (trigger, transport, version) → Catalog::resolve → &dyn MockEvent
//!                                                       │
//!                  MockEventParameters → generate_event ┘→ MockEventResponse
//! ```
//!
//! Every event family is a zero-sized descriptor implementing [`MockEvent`]
//! on top of a static [`EventDefinition`]. The catalog order is fixed and
//! drives resolution: the first descriptor matching trigger, transport and
//! version wins.
//!
//! # Usage
//!
//! ## Resolving and generating
//!
//! ```rust
//! use eventsub_mock::{resolve, MockEvent};
//! use eventsub_shared::MockEventParameters;
//!
//! let event = resolve("raid", "webhook", "").unwrap();
//! assert_eq!(event.get_topic("webhook", "raid"), Some("channel.raid"));
//!
//! let params = MockEventParameters::new("webhook", "raid")
//!     .with_to_user("1234", "Broadcaster")
//!     .with_from_user("5678", "Raider")
//!     .with_timestamp("2024-05-01T12:00:00Z");
//! let response = event.generate_event(&params).unwrap().unwrap();
//! assert!(response.json.contains("\"channel.raid\""));
//! ```
//!
//! ## Topic aliases
//!
//! A canonical topic string is accepted in place of a trigger name:
//!
//! ```rust
//! use eventsub_mock::MockEvent;
//!
//! let event = eventsub_mock::resolve("channel.subscription.end", "websocket", "").unwrap();
//! assert_eq!(event.name(), "subscribe");
//! ```
//!
//! ## Custom catalogs
//!
//! [`Catalog::new`] takes any ordered slice of descriptors, and
//! [`ResolverConfig`] picks how topic aliases are rewritten.
//!
//! ```rust
//! use eventsub_mock::{AliasMode, Catalog, MockEvent, ResolverConfig};
//!
//! let config = ResolverConfig::default().with_alias_mode(AliasMode::Normalized);
//! let catalog = Catalog::builtin().with_config(config);
//! assert!(catalog.resolve("channel-update", "webhook", "").is_err());
//! assert_eq!(catalog.resolve("channel-update", "webhook", "2").unwrap().name(), "channel_update_v2");
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod events;
mod generator;
pub mod random;
pub mod removed;
pub mod resolver;
pub mod topics;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{all_events, Catalog};
pub use config::{AliasMode, ResolverConfig, ALIAS_MODE_ENV};
pub use errors::{ConfigError, EventError, ResolveError};
pub use events::{EventDefinition, MockEvent, TopicMapping, TopicPairs};
pub use removed::{removed_events, was_removed};
pub use topics::WEBSOCKET_COMMAND_PREFIX;

/// Resolve a request against the built-in catalog with the default
/// resolver configuration.
///
/// See [`Catalog::resolve`] for the matching rules.
pub fn resolve(
    trigger: &str,
    transport: &str,
    version: &str,
) -> Result<&'static dyn MockEvent, ResolveError> {
    Catalog::builtin().resolve(trigger, transport, version)
}

/// Every webhook topic in the built-in catalog, deduplicated and sorted.
pub fn all_webhook_topics() -> Vec<&'static str> {
    Catalog::builtin().all_webhook_topics()
}

/// Websocket command topics in the built-in catalog, sorted.
pub fn websocket_command_topics() -> Vec<&'static str> {
    Catalog::builtin().websocket_command_topics()
}
