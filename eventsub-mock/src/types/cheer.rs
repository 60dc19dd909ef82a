//! `channel.cheer`: a viewer cheered bits.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("cheer", "channel.cheer")];

const DEFAULT_BITS: i64 = 100;

static DEFINITION: EventDefinition = EventDefinition {
    name: "cheer",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["cheer"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.cheer` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cheer;

#[derive(Serialize)]
struct CheerEvent<'a> {
    is_anonymous: bool,
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    message: &'a str,
    bits: i64,
}

impl MockEvent for Cheer {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&CheerEvent {
            is_anonymous: params.is_anonymous,
            user: User::unless_anonymous(params),
            broadcaster: Broadcaster::of(params),
            message: params.description.as_deref().unwrap_or("This is a test event."),
            bits: amount_or(params, || DEFAULT_BITS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_cheer_defaults() {
        let payload = payload(&Cheer, &params("cheer"));
        let body = &payload["event"];
        assert_eq!(body["bits"], DEFAULT_BITS);
        assert_eq!(body["is_anonymous"], false);
        assert_eq!(body["user_id"], "5678");
    }

    #[test]
    fn test_anonymous_cheer_hides_user() {
        let payload = payload(&Cheer, &params("cheer").anonymous().with_cost(500));
        let body = &payload["event"];
        assert_eq!(body["bits"], 500);
        assert_eq!(body["is_anonymous"], true);
        assert!(body["user_id"].is_null());
        assert!(body["user_name"].is_null());
    }
}
