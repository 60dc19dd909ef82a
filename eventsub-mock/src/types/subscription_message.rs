//! `channel.subscription.message`: a subscriber shared a resub message.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{tier, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const TOPICS: &[(&str, &str)] = &[("subscribe-message", "channel.subscription.message")];

const DEFAULT_TEXT: &str = "Hello from the Twitch CLI! twitchdevLeek";
const MAX_MONTHS: i64 = 75;

static DEFINITION: EventDefinition = EventDefinition {
    name: "subscription_message",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["subscribe-message"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.subscription.message` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionMessage;

#[derive(Serialize)]
struct SubscriptionMessageEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    tier: &'a str,
    message: ResubMessage<'a>,
    cumulative_months: i64,
    streak_months: Option<i64>,
    duration_months: i64,
}

#[derive(Serialize)]
struct ResubMessage<'a> {
    text: &'a str,
    emotes: Vec<Emote>,
}

#[derive(Serialize)]
struct Emote {
    begin: usize,
    end: usize,
    id: &'static str,
}

/// Emote positions for the default message; custom text carries none.
fn emotes(text: &str) -> Vec<Emote> {
    const EMOTE: &str = "twitchdevLeek";
    match text.find(EMOTE) {
        Some(begin) if text == DEFAULT_TEXT => vec![Emote {
            begin,
            end: begin + EMOTE.len() - 1,
            id: "304456832",
        }],
        _ => Vec::new(),
    }
}

impl MockEvent for SubscriptionMessage {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let text = params.description.as_deref().unwrap_or(DEFAULT_TEXT);
        let cumulative_months = random::random_int(MAX_MONTHS) + 1;

        to_body(&SubscriptionMessageEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
            tier: tier(params),
            message: ResubMessage {
                text,
                emotes: emotes(text),
            },
            cumulative_months,
            streak_months: Some(random::random_int(cumulative_months) + 1),
            duration_months: 1,
        })
    }
}
