//! `channel.raid`: one broadcaster raided another.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const TOPICS: &[(&str, &str)] = &[("raid", "channel.raid")];

static DEFINITION: EventDefinition = EventDefinition {
    name: "raid",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["raid"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.raid` event. The "from" user raids the "to" user.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raid;

#[derive(Serialize)]
struct RaidEvent<'a> {
    from_broadcaster_user_id: &'a str,
    from_broadcaster_user_login: &'a str,
    from_broadcaster_user_name: &'a str,
    to_broadcaster_user_id: &'a str,
    to_broadcaster_user_login: &'a str,
    to_broadcaster_user_name: &'a str,
    viewers: i64,
}

impl MockEvent for Raid {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition {
            to_broadcaster_user_id: Some(params.to_user_id.clone()),
            ..Default::default()
        }
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&RaidEvent {
            from_broadcaster_user_id: &params.from_user_id,
            from_broadcaster_user_login: &params.from_user_login,
            from_broadcaster_user_name: &params.from_user_name,
            to_broadcaster_user_id: &params.to_user_id,
            to_broadcaster_user_login: &params.to_user_login,
            to_broadcaster_user_name: &params.to_user_name,
            viewers: random::random_viewer_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_raid_body() {
        let payload = payload(&Raid, &params("raid"));
        assert_eq!(payload["subscription"]["condition"]["to_broadcaster_user_id"], "1234");

        let body = &payload["event"];
        assert_eq!(body["from_broadcaster_user_id"], "5678");
        assert_eq!(body["to_broadcaster_user_login"], "broadcaster");
        assert!(body["viewers"].as_i64().unwrap() >= 0);
    }
}
