//! Shield mode turned on or off by a moderator.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, Moderator, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const BEGIN_TOPIC: &str = "channel.shield_mode.begin";

const TOPICS: &[(&str, &str)] = &[
    ("shield-mode-begin", BEGIN_TOPIC),
    ("shield-mode-end", "channel.shield_mode.end"),
];

static DEFINITION: EventDefinition = EventDefinition {
    name: "shield_mode",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["shield-mode-begin", "shield-mode-end"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock shield mode events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShieldMode;

#[derive(Serialize)]
struct ShieldModeEvent<'a> {
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    moderator: Moderator<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<&'a str>,
}

impl MockEvent for ShieldMode {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id).with_moderator(&params.to_user_id)
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let at = Some(params.timestamp.as_str());
        let (started_at, ended_at) = if topic == BEGIN_TOPIC {
            (at, None)
        } else {
            (None, at)
        };

        to_body(&ShieldModeEvent {
            broadcaster: Broadcaster::of(params),
            moderator: Moderator::of(params),
            started_at,
            ended_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_shield_mode_begin() {
        let begin = payload(&ShieldMode, &params("shield-mode-begin"));
        assert_eq!(begin["subscription"]["condition"]["moderator_user_id"], "1234");
        assert_eq!(begin["event"]["started_at"], "2024-05-01T12:00:00Z");
        assert!(begin["event"].get("ended_at").is_none());
    }

    #[test]
    fn test_shield_mode_end() {
        let end = payload(&ShieldMode, &params("shield-mode-end"));
        assert_eq!(end["subscription"]["type"], "channel.shield_mode.end");
        assert_eq!(end["event"]["ended_at"], "2024-05-01T12:00:00Z");
        assert!(end["event"].get("started_at").is_none());
    }
}
