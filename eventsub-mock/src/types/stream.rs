//! `stream.online` and `stream.offline`.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

static STREAM_UP: EventDefinition = EventDefinition {
    name: "streamup",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["streamup"],
    mapping: &TopicMapping::mirrored(&[("streamup", "stream.online")]),
};

static STREAM_DOWN: EventDefinition = EventDefinition {
    name: "streamdown",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["streamdown"],
    mapping: &TopicMapping::mirrored(&[("streamdown", "stream.offline")]),
};

/// Mock `stream.online` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamUp;

/// Mock `stream.offline` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamDown;

#[derive(Serialize)]
struct StreamOnlineEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(rename = "type")]
    stream_type: &'static str,
    started_at: &'a str,
}

impl MockEvent for StreamUp {
    fn definition(&self) -> &'static EventDefinition {
        &STREAM_UP
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&StreamOnlineEvent {
            id: random::random_user_id(),
            broadcaster: Broadcaster::of(params),
            stream_type: "live",
            started_at: &params.timestamp,
        })
    }
}

impl MockEvent for StreamDown {
    fn definition(&self) -> &'static EventDefinition {
        &STREAM_DOWN
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&Broadcaster::of(params))
    }
}
