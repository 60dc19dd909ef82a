//! `channel.subscription.gift`: a viewer gifted subscriptions.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, tier, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const TOPICS: &[(&str, &str)] = &[("gift", "channel.subscription.gift")];

const DEFAULT_GIFTS: i64 = 5;
const MAX_CUMULATIVE: i64 = 200;

static DEFINITION: EventDefinition = EventDefinition {
    name: "gift",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["gift"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.subscription.gift` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gift;

#[derive(Serialize)]
struct GiftEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    total: i64,
    tier: &'a str,
    cumulative_total: Option<i64>,
    is_anonymous: bool,
}

impl MockEvent for Gift {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let total = amount_or(params, || DEFAULT_GIFTS);
        // Anonymous gifters have no visible running total.
        let cumulative_total = (!params.is_anonymous)
            .then(|| total + random::random_int(MAX_CUMULATIVE));

        to_body(&GiftEvent {
            user: User::unless_anonymous(params),
            broadcaster: Broadcaster::of(params),
            total,
            tier: tier(params),
            cumulative_total,
            is_anonymous: params.is_anonymous,
        })
    }
}
