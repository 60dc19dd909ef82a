//! Creator goals: begin, progress and end.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, shift_timestamp, to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const BEGIN_TOPIC: &str = "channel.goal.begin";
const END_TOPIC: &str = "channel.goal.end";

const TOPICS: &[(&str, &str)] = &[
    ("goal-begin", BEGIN_TOPIC),
    ("goal-progress", "channel.goal.progress"),
    ("goal-end", END_TOPIC),
];

const GOAL_TYPES: &[&str] = &[
    "follower",
    "subscription",
    "subscription_count",
    "new_subscription",
    "new_subscription_count",
];
const DEFAULT_TARGET: i64 = 1_000;

/// Minutes a mock goal has been running when it ends.
const GOAL_MINUTES: i64 = 60 * 24;

static DEFINITION: EventDefinition = EventDefinition {
    name: "goal",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["goal-begin", "goal-progress", "goal-end"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock creator goal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Goal;

#[derive(Serialize)]
struct GoalEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(rename = "type")]
    goal_type: &'static str,
    description: &'a str,
    current_amount: i64,
    target_amount: i64,
    started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_achieved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<&'a str>,
}

impl MockEvent for Goal {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let ended = topic == END_TOPIC;
        let current_amount = if topic == BEGIN_TOPIC {
            0
        } else {
            amount_or(params, || random::random_int(DEFAULT_TARGET))
        };
        let goal_type = GOAL_TYPES[random::random_int(GOAL_TYPES.len() as i64) as usize];

        // An ending goal started a day before the event.
        let started_at = if ended {
            shift_timestamp(&params.timestamp, -GOAL_MINUTES)
        } else {
            params.timestamp.clone()
        };

        to_body(&GoalEvent {
            id: params.item_id.clone().unwrap_or_else(random::random_guid),
            broadcaster: Broadcaster::of(params),
            goal_type,
            description: params.description.as_deref().unwrap_or("Twitch CLI Goal"),
            current_amount,
            target_amount: DEFAULT_TARGET,
            started_at,
            is_achieved: ended.then_some(current_amount >= DEFAULT_TARGET),
            ended_at: ended.then_some(params.timestamp.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_goal_begin() {
        let begin = payload(&Goal, &params("goal-begin"));
        let body = &begin["event"];
        assert_eq!(body["current_amount"], 0);
        assert_eq!(body["started_at"], "2024-05-01T12:00:00Z");
        assert!(GOAL_TYPES.contains(&body["type"].as_str().unwrap()));
        assert!(body.get("ended_at").is_none());
    }

    #[test]
    fn test_goal_end() {
        let end = payload(&Goal, &params("goal-end").with_cost(DEFAULT_TARGET));
        let body = &end["event"];
        assert_eq!(body["is_achieved"], true);
        assert_eq!(body["ended_at"], "2024-05-01T12:00:00Z");
        assert_eq!(body["started_at"], "2024-04-30T12:00:00Z");
    }
}
