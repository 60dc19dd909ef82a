//! `user.authorization.grant`: a user authorized an application.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, User, WEBHOOK_ONLY};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

static DEFINITION: EventDefinition = EventDefinition {
    name: "authorization_grant",
    version: "1",
    transports: WEBHOOK_ONLY,
    triggers: &["grant"],
    mapping: &[TopicMapping::new(
        eventsub_shared::Transport::Webhook,
        &[("grant", "user.authorization.grant")],
    )],
};

/// Mock `user.authorization.grant` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGrant;

#[derive(Serialize)]
pub(crate) struct AuthorizationEvent<'a> {
    pub client_id: String,
    #[serde(flatten)]
    pub user: User<'a>,
}

/// The request's client ID, or a random one.
pub(crate) fn client_id(params: &MockEventParameters) -> String {
    params
        .client_id
        .clone()
        .unwrap_or_else(random::random_client_id)
}

impl MockEvent for AuthorizationGrant {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::client(client_id(params))
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&AuthorizationEvent {
            client_id: client_id(params),
            user: User::of(params),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_grant_uses_given_client_id() {
        let payload = payload(&AuthorizationGrant, &params("grant").with_client_id("abc"));
        assert_eq!(payload["subscription"]["condition"]["client_id"], "abc");
        assert_eq!(payload["event"]["client_id"], "abc");
        assert_eq!(payload["event"]["user_id"], "5678");
    }

    #[test]
    fn test_grant_is_webhook_only() {
        let request = params("grant");
        let request = eventsub_shared::MockEventParameters {
            transport: "websocket".to_string(),
            ..request
        };
        assert!(AuthorizationGrant.generate_event(&request).unwrap().is_none());
    }
}
