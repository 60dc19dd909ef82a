//! Channel points custom rewards, added, updated and removed.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::channel_points_redemption::{
    DEFAULT_REWARD_COST, DEFAULT_REWARD_PROMPT, DEFAULT_REWARD_TITLE,
};
use super::{amount_or, to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const TOPICS: &[(&str, &str)] = &[
    ("add-reward", "channel.channel_points_custom_reward.add"),
    ("update-reward", "channel.channel_points_custom_reward.update"),
    ("remove-reward", "channel.channel_points_custom_reward.remove"),
];

const IMAGE_BASE: &str = "https://static-cdn.jtvnw.net/custom-reward-images/default";

static DEFINITION: EventDefinition = EventDefinition {
    name: "channel_points_reward",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["add-reward", "update-reward", "remove-reward"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock custom reward add / update / remove events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelPointsReward;

#[derive(Serialize)]
struct RewardEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    is_enabled: bool,
    is_paused: bool,
    is_in_stock: bool,
    title: &'a str,
    cost: i64,
    prompt: &'static str,
    is_user_input_required: bool,
    should_redemptions_skip_request_queue: bool,
    cooldown_expires_at: Option<&'a str>,
    redemptions_redeemed_current_stream: Option<i64>,
    max_per_stream: Limit,
    max_per_user_per_stream: Limit,
    global_cooldown: Cooldown,
    background_color: &'static str,
    image: Option<Images>,
    default_image: Images,
}

#[derive(Serialize)]
struct Limit {
    is_enabled: bool,
    value: i64,
}

#[derive(Serialize)]
struct Cooldown {
    is_enabled: bool,
    seconds: i64,
}

#[derive(Serialize)]
struct Images {
    url_1x: String,
    url_2x: String,
    url_4x: String,
}

impl Images {
    fn default_set() -> Self {
        Self {
            url_1x: format!("{IMAGE_BASE}-1.png"),
            url_2x: format!("{IMAGE_BASE}-2.png"),
            url_4x: format!("{IMAGE_BASE}-4.png"),
        }
    }
}

impl MockEvent for ChannelPointsReward {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&RewardEvent {
            id: params.item_id.clone().unwrap_or_else(random::random_guid),
            broadcaster: Broadcaster::of(params),
            is_enabled: true,
            is_paused: false,
            is_in_stock: true,
            title: params.description.as_deref().unwrap_or(DEFAULT_REWARD_TITLE),
            cost: amount_or(params, || DEFAULT_REWARD_COST),
            prompt: DEFAULT_REWARD_PROMPT,
            is_user_input_required: false,
            should_redemptions_skip_request_queue: false,
            cooldown_expires_at: None,
            redemptions_redeemed_current_stream: None,
            max_per_stream: Limit {
                is_enabled: false,
                value: 0,
            },
            max_per_user_per_stream: Limit {
                is_enabled: false,
                value: 0,
            },
            global_cooldown: Cooldown {
                is_enabled: false,
                seconds: 0,
            },
            background_color: "#c0ffee",
            image: None,
            default_image: Images::default_set(),
        })
    }
}
