//! Channel points custom reward redemptions, added and updated.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const ADD_TOPIC: &str = "channel.channel_points_custom_reward_redemption.add";
const UPDATE_TOPIC: &str = "channel.channel_points_custom_reward_redemption.update";

const TOPICS: &[(&str, &str)] = &[
    ("add-redemption", ADD_TOPIC),
    ("update-redemption", UPDATE_TOPIC),
];

pub(crate) const DEFAULT_REWARD_COST: i64 = 150;
pub(crate) const DEFAULT_REWARD_TITLE: &str = "Test Reward from CLI";
pub(crate) const DEFAULT_REWARD_PROMPT: &str = "Redeem Your Test Reward from CLI";

static DEFINITION: EventDefinition = EventDefinition {
    name: "channel_points_redemption",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["add-redemption", "update-redemption"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock reward redemption add / update events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelPointsRedemption;

#[derive(Serialize)]
struct RedemptionEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    user: User<'a>,
    user_input: &'a str,
    status: &'static str,
    reward: Reward,
    redeemed_at: &'a str,
}

#[derive(Serialize)]
struct Reward {
    id: String,
    title: &'static str,
    cost: i64,
    prompt: &'static str,
}

impl MockEvent for ChannelPointsRedemption {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        // Updates are only sent once a redemption has been handled.
        let status = if topic == UPDATE_TOPIC { "fulfilled" } else { "unfulfilled" };

        to_body(&RedemptionEvent {
            id: random::random_guid(),
            broadcaster: Broadcaster::of(params),
            user: User::of(params),
            user_input: params.description.as_deref().unwrap_or("Test Input From CLI"),
            status,
            reward: Reward {
                id: params.item_id.clone().unwrap_or_else(random::random_guid),
                title: DEFAULT_REWARD_TITLE,
                cost: amount_or(params, || DEFAULT_REWARD_COST),
                prompt: DEFAULT_REWARD_PROMPT,
            },
            redeemed_at: &params.timestamp,
        })
    }
}
