//! Polls: begin, progress and end.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{shift_timestamp, to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const BEGIN_TOPIC: &str = "channel.poll.begin";
const END_TOPIC: &str = "channel.poll.end";

const TOPICS: &[(&str, &str)] = &[
    ("poll-begin", BEGIN_TOPIC),
    ("poll-progress", "channel.poll.progress"),
    ("poll-end", END_TOPIC),
];

const CHOICES: &[&str] = &["Yes, but on the blue side", "No", "Maybe"];
const MAX_VOTES: i64 = 100;
const POLL_MINUTES: i64 = 15;

static DEFINITION: EventDefinition = EventDefinition {
    name: "poll",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["poll-begin", "poll-progress", "poll-end"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock poll events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Poll;

#[derive(Serialize)]
struct Choice {
    id: String,
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits_votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_points_votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    votes: Option<i64>,
}

#[derive(Serialize)]
struct Voting {
    is_enabled: bool,
    amount_per_vote: i64,
}

#[derive(Serialize)]
struct PollEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    title: &'a str,
    choices: Vec<Choice>,
    bits_voting: Voting,
    channel_points_voting: Voting,
    started_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ends_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<String>,
}

impl MockEvent for Poll {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        // Vote counts only exist once voting has opened.
        let counted = topic != BEGIN_TOPIC;
        let choices = CHOICES
            .iter()
            .map(|&title| {
                let votes = counted.then(|| random::random_int(MAX_VOTES));
                Choice {
                    id: random::random_guid(),
                    title,
                    bits_votes: counted.then_some(0),
                    channel_points_votes: votes,
                    votes,
                }
            })
            .collect();

        let closing = shift_timestamp(&params.timestamp, POLL_MINUTES);
        let (ends_at, status, ended_at) = if topic == END_TOPIC {
            (None, Some("completed"), Some(closing))
        } else {
            (Some(closing), None, None)
        };

        to_body(&PollEvent {
            id: params.item_id.clone().unwrap_or_else(random::random_guid),
            broadcaster: Broadcaster::of(params),
            title: params.description.as_deref().unwrap_or("Pineapple on pizza?"),
            choices,
            bits_voting: Voting {
                is_enabled: true,
                amount_per_vote: 10,
            },
            channel_points_voting: Voting {
                is_enabled: true,
                amount_per_vote: 500,
            },
            started_at: &params.timestamp,
            ends_at,
            status,
            ended_at,
        })
    }
}
