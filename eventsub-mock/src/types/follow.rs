//! `channel.follow` version 2. Version 1 was retired from production.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("follow", "channel.follow")];

static DEFINITION: EventDefinition = EventDefinition {
    name: "follow",
    version: "2",
    transports: BOTH_TRANSPORTS,
    triggers: &["follow"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.follow` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Follow;

#[derive(Serialize)]
struct FollowEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    followed_at: &'a str,
}

impl MockEvent for Follow {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id).with_moderator(&params.to_user_id)
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&FollowEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
            followed_at: &params.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_follow_v2_condition_has_moderator() {
        let payload = payload(&Follow, &params("follow"));
        assert_eq!(payload["subscription"]["version"], "2");
        assert_eq!(payload["subscription"]["condition"]["moderator_user_id"], "1234");
        assert_eq!(payload["event"]["followed_at"], "2024-05-01T12:00:00Z");
        assert_eq!(payload["event"]["user_login"], "viewer");
    }
}
