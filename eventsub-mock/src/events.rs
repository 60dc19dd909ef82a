//! The event descriptor contract.
//!
//! Every event family implements [`MockEvent`]. A descriptor only has to
//! provide its static [`EventDefinition`] and its event body; capability
//! queries and envelope generation are shared provided methods driven by the
//! definition.

use std::fmt;

use eventsub_shared::{
    EventsubCondition, MockEventParameters, MockEventResponse, Transport, TRANSPORT_WEBHOOK,
};
use serde_json::Value;

use crate::errors::EventError;
use crate::generator;

/// (trigger, topic) pairs exposed under one transport.
pub type TopicPairs = &'static [(&'static str, &'static str)];

/// The topics one transport maps triggers to.
#[derive(Debug, Clone, Copy)]
pub struct TopicMapping {
    /// The transport these topics are delivered over.
    pub transport: Transport,
    /// Trigger to topic pairs, in listing order.
    pub topics: TopicPairs,
}

impl TopicMapping {
    /// Map triggers to topics for one transport.
    pub const fn new(transport: Transport, topics: TopicPairs) -> Self {
        Self { transport, topics }
    }

    /// The same trigger to topic pairs on both webhook and websocket.
    pub const fn mirrored(topics: TopicPairs) -> [TopicMapping; 2] {
        [
            TopicMapping::new(Transport::Webhook, topics),
            TopicMapping::new(Transport::WebSocket, topics),
        ]
    }
}

/// Static capability description of one event type at one version.
///
/// Invariant: every trigger in `triggers` has a topic under every transport
/// in `transports`.
#[derive(Debug)]
pub struct EventDefinition {
    /// Stable identifier, e.g. `channel_update_v2`.
    pub name: &'static str,
    /// Schema version this descriptor implements.
    pub version: &'static str,
    /// Transports this event can be generated for.
    pub transports: &'static [Transport],
    /// Trigger names this descriptor answers to.
    pub triggers: &'static [&'static str],
    /// Per-transport trigger to topic mapping.
    pub mapping: &'static [TopicMapping],
}

impl EventDefinition {
    /// The (trigger, topic) pairs under a transport name; empty if unmapped.
    pub fn topics_for(&self, transport: &str) -> TopicPairs {
        self.mapping
            .iter()
            .find(|m| m.transport.as_str() == transport)
            .map(|m| m.topics)
            .unwrap_or(&[])
    }
}

/// A mock event type: capability queries plus payload generation.
///
/// Implementors are zero-sized and registered in the fixed catalog, so the
/// trait requires `Send + Sync` and the catalog can be shared freely.
pub trait MockEvent: Send + Sync {
    /// The static definition driving the provided methods.
    fn definition(&self) -> &'static EventDefinition;

    /// Build the type-specific event body for `topic`.
    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError>;

    /// Subscription condition for the envelope. Defaults to the target broadcaster.
    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id)
    }

    /// Generate the serialized payload for `params`.
    ///
    /// Returns `Ok(None)` when `params.transport` is not supported. The
    /// `event` body is left out unless the subscription status is `enabled`.
    fn generate_event(
        &self,
        params: &MockEventParameters,
    ) -> Result<Option<MockEventResponse>, EventError> {
        generator::generate(self, params)
    }

    /// Stable descriptor name.
    fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Whether `transport` is one of the supported transport names.
    fn valid_transport(&self, transport: &str) -> bool {
        self.definition()
            .transports
            .iter()
            .any(|t| t.as_str() == transport)
    }

    /// Whether `trigger` is one of the supported trigger names.
    fn valid_trigger(&self, trigger: &str) -> bool {
        self.definition().triggers.iter().any(|t| *t == trigger)
    }

    /// The topic `trigger` maps to under `transport`.
    fn get_topic(&self, transport: &str, trigger: &str) -> Option<&'static str> {
        self.definition()
            .topics_for(transport)
            .iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, topic)| *topic)
    }

    /// Every topic exposed under `transport`.
    fn get_all_topics_by_transport(&self, transport: &str) -> Vec<&'static str> {
        self.definition()
            .topics_for(transport)
            .iter()
            .map(|(_, topic)| *topic)
            .collect()
    }

    /// The trigger whose webhook topic is `topic`.
    ///
    /// Aliases are always looked up in the webhook mapping, whatever
    /// transport the caller asked for.
    fn get_eventsub_alias(&self, topic: &str) -> Option<&'static str> {
        self.definition()
            .topics_for(TRANSPORT_WEBHOOK)
            .iter()
            .find(|(_, t)| *t == topic)
            .map(|(trigger, _)| *trigger)
    }

    /// The schema version this descriptor implements.
    fn subscription_version(&self) -> &'static str {
        self.definition().version
    }
}

impl fmt::Debug for dyn MockEvent + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockEvent")
            .field("name", &self.name())
            .field("version", &self.subscription_version())
            .finish()
    }
}
