//! Envelope generation shared by every event descriptor.
//!
//! Wraps a descriptor's event body in EventSub subscription metadata and
//! serializes the result.

use eventsub_shared::{
    EventsubResponse, EventsubSubscription, EventsubTransport, MockEventParameters,
    MockEventResponse,
};
use tracing::debug;

use crate::errors::EventError;
use crate::events::MockEvent;

/// Subscription cost reported in mock envelopes.
const MOCK_SUBSCRIPTION_COST: i64 = 0;

/// Generate the payload for `event`.
///
/// Returns `Ok(None)` when the event does not support `params.transport`.
pub(crate) fn generate<E: MockEvent + ?Sized>(
    event: &E,
    params: &MockEventParameters,
) -> Result<Option<MockEventResponse>, EventError> {
    let Some(transport) = event
        .definition()
        .transports
        .iter()
        .copied()
        .find(|t| t.as_str() == params.transport)
    else {
        debug!(
            event = event.name(),
            transport = %params.transport,
            "Transport not supported, nothing generated"
        );
        return Ok(None);
    };

    let topic = resolve_topic(event, params);

    // Disabled subscriptions deliver metadata only.
    let body = if params.is_enabled() {
        Some(event.event_body(topic, params)?)
    } else {
        None
    };

    let response = EventsubResponse {
        subscription: EventsubSubscription {
            id: params.subscription_id.clone(),
            status: params.subscription_status.clone(),
            subscription_type: topic.to_string(),
            version: event.subscription_version().to_string(),
            condition: event.condition(params),
            transport: EventsubTransport::mock(transport),
            cost: MOCK_SUBSCRIPTION_COST,
            created_at: params.timestamp.clone(),
        },
        event: body,
    };

    let json = serde_json::to_string(&response)?;

    debug!(
        event = event.name(),
        topic,
        status = %params.subscription_status,
        has_event = response.event.is_some(),
        "Generated mock event"
    );

    Ok(Some(MockEventResponse {
        id: params.event_message_id.clone(),
        json,
        from_user: params.from_user_id.clone(),
        to_user: params.to_user_id.clone(),
    }))
}

/// The topic for the request, accepting a topic string in place of a trigger.
///
/// A trigger the descriptor does not know falls back to its first topic on
/// the transport.
fn resolve_topic<E: MockEvent + ?Sized>(event: &E, params: &MockEventParameters) -> &'static str {
    event
        .get_topic(&params.transport, &params.trigger)
        .or_else(|| {
            event
                .get_eventsub_alias(&params.trigger)
                .and_then(|trigger| event.get_topic(&params.transport, trigger))
        })
        .or_else(|| {
            let (_, topic) = event.definition().topics_for(&params.transport).first()?;
            Some(*topic)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::raid::Raid;
    use crate::types::subscribe::Subscribe;
    use serde_json::Value;

    fn params(transport: &str, trigger: &str) -> MockEventParameters {
        MockEventParameters::new(transport, trigger)
            .with_subscription_id("sub-1")
            .with_to_user("1234", "Broadcaster")
            .with_from_user("5678", "Viewer")
            .with_event_message_id("msg-1")
            .with_timestamp("2024-05-01T12:00:00Z")
    }

    fn parse(response: &MockEventResponse) -> Value {
        serde_json::from_str(&response.json).unwrap()
    }

    #[test]
    fn test_enabled_payload_has_event() {
        let response = Raid.generate_event(&params("webhook", "raid")).unwrap().unwrap();
        let payload = parse(&response);

        assert!(payload.get("event").is_some());
        assert_eq!(payload["subscription"]["type"], "channel.raid");
        assert_eq!(payload["subscription"]["version"], "1");
        assert_eq!(payload["subscription"]["id"], "sub-1");
        assert_eq!(payload["subscription"]["created_at"], "2024-05-01T12:00:00Z");
        assert_eq!(payload["subscription"]["cost"], 0);
        assert_eq!(response.id, "msg-1");
        assert_eq!(response.from_user, "5678");
        assert_eq!(response.to_user, "1234");
    }

    #[test]
    fn test_disabled_payload_has_subscription_only() {
        let request = params("webhook", "raid")
            .with_subscription_status("webhook_callback_verification_pending");
        let response = Raid.generate_event(&request).unwrap().unwrap();
        let payload = parse(&response);

        assert!(payload.get("event").is_none());
        assert_eq!(
            payload["subscription"]["status"],
            "webhook_callback_verification_pending"
        );
    }

    #[test]
    fn test_status_match_ignores_case() {
        let request = params("websocket", "raid").with_subscription_status("Enabled");
        let payload = parse(&Raid.generate_event(&request).unwrap().unwrap());
        assert!(payload.get("event").is_some());
        assert_eq!(payload["subscription"]["transport"]["method"], "websocket");
    }

    #[test]
    fn test_unsupported_transport_is_empty() {
        assert!(Raid.generate_event(&params("carrier", "raid")).unwrap().is_none());
        assert!(Raid.generate_event(&params("Webhook", "raid")).unwrap().is_none());
    }

    #[test]
    fn test_topic_follows_trigger() {
        let payload = parse(&Subscribe.generate_event(&params("webhook", "unsubscribe")).unwrap().unwrap());
        assert_eq!(payload["subscription"]["type"], "channel.subscription.end");
    }

    #[test]
    fn test_topic_accepted_in_place_of_trigger() {
        let request = params("webhook", "channel.subscription.end");
        let payload = parse(&Subscribe.generate_event(&request).unwrap().unwrap());
        assert_eq!(payload["subscription"]["type"], "channel.subscription.end");
    }

    #[test]
    fn test_unknown_trigger_uses_first_topic() {
        let request = params("webhook", "not-a-raid");
        let payload = parse(&Raid.generate_event(&request).unwrap().unwrap());
        assert_eq!(payload["subscription"]["type"], "channel.raid");

        let request = params("websocket", "not-a-subscription");
        let payload = parse(&Subscribe.generate_event(&request).unwrap().unwrap());
        assert_eq!(payload["subscription"]["type"], "channel.subscribe");
    }
}
