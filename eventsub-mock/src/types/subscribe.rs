//! `channel.subscribe` and `channel.subscription.end`.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{tier, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[
    ("subscribe", "channel.subscribe"),
    ("unsubscribe", "channel.subscription.end"),
];

static DEFINITION: EventDefinition = EventDefinition {
    name: "subscribe",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["subscribe", "unsubscribe"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock subscription start / end events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subscribe;

#[derive(Serialize)]
struct SubscribeEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    tier: &'a str,
    is_gift: bool,
}

impl MockEvent for Subscribe {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&SubscribeEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
            tier: tier(params),
            is_gift: params.is_gift,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_subscribe_body() {
        let payload = payload(&Subscribe, &params("subscribe").gifted());
        assert_eq!(payload["subscription"]["type"], "channel.subscribe");
        assert_eq!(payload["event"]["tier"], "1000");
        assert_eq!(payload["event"]["is_gift"], true);
    }

    #[test]
    fn test_unsubscribe_topic() {
        let payload = payload(&Subscribe, &params("unsubscribe").with_tier("3000"));
        assert_eq!(payload["subscription"]["type"], "channel.subscription.end");
        assert_eq!(payload["event"]["tier"], "3000");
    }
}
