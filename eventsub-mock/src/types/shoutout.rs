//! `channel.shoutout.create` and `channel.shoutout.receive`.
//!
//! The "to" user is the broadcaster the subscription targets. On create it
//! gives the shoutout to the "from" user; on receive it gets one from them.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{shift_timestamp, to_body, Broadcaster, Moderator, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const CREATE_TOPIC: &str = "channel.shoutout.create";
const RECEIVE_TOPIC: &str = "channel.shoutout.receive";

const TOPICS: &[(&str, &str)] = &[
    ("shoutout-create", CREATE_TOPIC),
    ("shoutout-received", RECEIVE_TOPIC),
];

/// Minutes before the broadcaster can shout out anyone again.
const COOLDOWN_MINUTES: i64 = 2;
/// Minutes before the broadcaster can shout out the same channel again.
const TARGET_COOLDOWN_MINUTES: i64 = 60;

static DEFINITION: EventDefinition = EventDefinition {
    name: "shoutout",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["shoutout-create", "shoutout-received"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock shoutout events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shoutout;

#[derive(Serialize)]
struct ShoutoutCreateEvent<'a> {
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    moderator: Moderator<'a>,
    to_broadcaster_user_id: &'a str,
    to_broadcaster_user_login: &'a str,
    to_broadcaster_user_name: &'a str,
    started_at: &'a str,
    viewer_count: i64,
    cooldown_ends_at: String,
    target_cooldown_ends_at: String,
}

#[derive(Serialize)]
struct ShoutoutReceiveEvent<'a> {
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    from_broadcaster_user_id: &'a str,
    from_broadcaster_user_login: &'a str,
    from_broadcaster_user_name: &'a str,
    viewer_count: i64,
    started_at: &'a str,
}

impl MockEvent for Shoutout {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id).with_moderator(&params.to_user_id)
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let viewer_count = random::random_viewer_count();

        if topic == RECEIVE_TOPIC {
            return to_body(&ShoutoutReceiveEvent {
                broadcaster: Broadcaster::of(params),
                from_broadcaster_user_id: &params.from_user_id,
                from_broadcaster_user_login: &params.from_user_login,
                from_broadcaster_user_name: &params.from_user_name,
                viewer_count,
                started_at: &params.timestamp,
            });
        }

        to_body(&ShoutoutCreateEvent {
            broadcaster: Broadcaster::of(params),
            moderator: Moderator::of(params),
            to_broadcaster_user_id: &params.from_user_id,
            to_broadcaster_user_login: &params.from_user_login,
            to_broadcaster_user_name: &params.from_user_name,
            started_at: &params.timestamp,
            viewer_count,
            cooldown_ends_at: shift_timestamp(&params.timestamp, COOLDOWN_MINUTES),
            target_cooldown_ends_at: shift_timestamp(&params.timestamp, TARGET_COOLDOWN_MINUTES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_shoutout_create_cooldowns() {
        let payload = payload(&Shoutout, &params("shoutout-create"));
        assert_eq!(payload["subscription"]["type"], CREATE_TOPIC);

        let body = &payload["event"];
        assert_eq!(body["to_broadcaster_user_id"], "5678");
        assert_eq!(body["cooldown_ends_at"], "2024-05-01T12:02:00Z");
        assert_eq!(body["target_cooldown_ends_at"], "2024-05-01T13:00:00Z");
    }

    #[test]
    fn test_shoutout_receive_body() {
        let payload = payload(&Shoutout, &params("shoutout-received"));
        assert_eq!(payload["subscription"]["type"], RECEIVE_TOPIC);

        let body = &payload["event"];
        assert_eq!(body["from_broadcaster_user_id"], "5678");
        assert!(body.get("cooldown_ends_at").is_none());
    }
}
