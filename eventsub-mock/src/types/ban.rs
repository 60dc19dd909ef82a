//! `channel.ban`: a viewer was banned or timed out.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, Moderator, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("ban", "channel.ban")];

static DEFINITION: EventDefinition = EventDefinition {
    name: "ban",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["ban"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.ban` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ban;

#[derive(Serialize)]
struct BanEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    moderator: Moderator<'a>,
    reason: &'a str,
    banned_at: &'a str,
    ends_at: Option<&'a str>,
    is_permanent: bool,
}

impl MockEvent for Ban {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let ends_at = params.ban_end_timestamp.as_deref();

        to_body(&BanEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
            moderator: Moderator::of(params),
            reason: params.description.as_deref().unwrap_or("This is a test event"),
            banned_at: &params.timestamp,
            ends_at,
            is_permanent: ends_at.is_none(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_permanent_ban() {
        let payload = payload(&Ban, &params("ban"));
        let body = &payload["event"];
        assert_eq!(body["is_permanent"], true);
        assert!(body["ends_at"].is_null());
        assert_eq!(body["moderator_user_id"], "1234");
        assert_eq!(body["user_id"], "5678");
    }

    #[test]
    fn test_timed_ban() {
        let request = params("ban").with_ban_end("2024-05-01T12:10:00Z");
        let payload = payload(&Ban, &request);
        let body = &payload["event"];
        assert_eq!(body["is_permanent"], false);
        assert_eq!(body["ends_at"], "2024-05-01T12:10:00Z");
    }
}
