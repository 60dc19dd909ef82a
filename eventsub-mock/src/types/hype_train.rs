//! Hype trains: begin, progress and end.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, shift_timestamp, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const BEGIN_TOPIC: &str = "channel.hype_train.begin";
const END_TOPIC: &str = "channel.hype_train.end";

const TOPICS: &[(&str, &str)] = &[
    ("hype-train-begin", BEGIN_TOPIC),
    ("hype-train-progress", "channel.hype_train.progress"),
    ("hype-train-end", END_TOPIC),
];

const LEVEL_GOAL: i64 = 1_000;
const MAX_CONTRIBUTION: i64 = 500;
const EXPIRY_MINUTES: i64 = 5;
const COOLDOWN_MINUTES: i64 = 60;

static DEFINITION: EventDefinition = EventDefinition {
    name: "hype_train",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["hype-train-begin", "hype-train-progress", "hype-train-end"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock hype train events.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypeTrain;

#[derive(Serialize)]
struct Contribution<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(rename = "type")]
    contribution_type: &'static str,
    total: i64,
}

impl<'a> Contribution<'a> {
    fn random(params: &'a MockEventParameters) -> Self {
        Self {
            user: User::of(params),
            contribution_type: random::random_type(),
            total: random::random_int(MAX_CONTRIBUTION) + 1,
        }
    }
}

#[derive(Serialize)]
struct HypeTrainEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    level: i64,
    total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    goal: Option<i64>,
    top_contributions: Vec<Contribution<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_contribution: Option<Contribution<'a>>,
    started_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cooldown_ends_at: Option<String>,
}

impl MockEvent for HypeTrain {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let total = amount_or(params, || random::random_int(LEVEL_GOAL * 3));
        let level = total / LEVEL_GOAL + 1;
        let top_contributions = vec![Contribution::random(params), Contribution::random(params)];

        let event = if topic == END_TOPIC {
            HypeTrainEvent {
                id: random::random_guid(),
                broadcaster: Broadcaster::of(params),
                level,
                total,
                progress: None,
                goal: None,
                top_contributions,
                last_contribution: None,
                started_at: &params.timestamp,
                expires_at: None,
                ended_at: Some(&params.timestamp),
                cooldown_ends_at: Some(shift_timestamp(&params.timestamp, COOLDOWN_MINUTES)),
            }
        } else {
            let progress = if topic == BEGIN_TOPIC { 0 } else { total % LEVEL_GOAL };
            HypeTrainEvent {
                id: random::random_guid(),
                broadcaster: Broadcaster::of(params),
                level,
                total,
                progress: Some(progress),
                goal: Some(LEVEL_GOAL),
                top_contributions,
                last_contribution: Some(Contribution::random(params)),
                started_at: &params.timestamp,
                expires_at: Some(shift_timestamp(&params.timestamp, EXPIRY_MINUTES)),
                ended_at: None,
                cooldown_ends_at: None,
            }
        };

        to_body(&event)
    }
}
