//! Unban requests: a banned viewer asks to be unbanned, and a moderator
//! resolves the request.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, Moderator, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const CREATE_TOPIC: &str = "channel.unban_request.create";

const TOPICS: &[(&str, &str)] = &[
    ("unban-request-create", CREATE_TOPIC),
    ("unban-request-resolve", "channel.unban_request.resolve"),
];

static DEFINITION: EventDefinition = EventDefinition {
    name: "unban_requests",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["unban-request-create", "unban-request-resolve"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock unban request events.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnbanRequests;

#[derive(Serialize)]
struct CreateEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    user: User<'a>,
    text: &'a str,
    created_at: &'a str,
}

#[derive(Serialize)]
struct ResolveEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    moderator: Moderator<'a>,
    #[serde(flatten)]
    user: User<'a>,
    resolution_text: &'a str,
    status: &'static str,
}

impl MockEvent for UnbanRequests {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id).with_moderator(&params.to_user_id)
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let id = params.item_id.clone().unwrap_or_else(random::random_guid);

        if topic == CREATE_TOPIC {
            return to_body(&CreateEvent {
                id,
                broadcaster: Broadcaster::of(params),
                user: User::of(params),
                text: params.description.as_deref().unwrap_or("Please unban me from the channel"),
                created_at: &params.timestamp,
            });
        }

        to_body(&ResolveEvent {
            id,
            broadcaster: Broadcaster::of(params),
            moderator: Moderator::of(params),
            user: User::of(params),
            resolution_text: params.description.as_deref().unwrap_or("You have been unbanned"),
            status: "approved",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_unban_request_create() {
        let create = payload(&UnbanRequests, &params("unban-request-create").with_item_id("req-1"));
        let body = &create["event"];
        assert_eq!(body["id"], "req-1");
        assert_eq!(body["user_id"], "5678");
        assert_eq!(body["created_at"], "2024-05-01T12:00:00Z");
        assert!(body.get("moderator_user_id").is_none());
    }

    #[test]
    fn test_unban_request_resolve() {
        let resolved = payload(&UnbanRequests, &params("unban-request-resolve"));
        assert_eq!(resolved["subscription"]["condition"]["moderator_user_id"], "1234");
        let body = &resolved["event"];
        assert_eq!(body["status"], "approved");
        assert_eq!(body["moderator_user_id"], "1234");
        assert_eq!(body["user_login"], "viewer");
    }
}
