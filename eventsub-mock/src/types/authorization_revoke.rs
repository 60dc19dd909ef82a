//! `user.authorization.revoke`: a user revoked an application's access.

use eventsub_shared::{EventsubCondition, MockEventParameters, Transport};
use serde_json::Value;

use super::authorization_grant::{client_id, AuthorizationEvent};
use super::{to_body, User, WEBHOOK_ONLY};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

static DEFINITION: EventDefinition = EventDefinition {
    name: "authorization_revoke",
    version: "1",
    transports: WEBHOOK_ONLY,
    triggers: &["revoke"],
    mapping: &[TopicMapping::new(
        Transport::Webhook,
        &[("revoke", "user.authorization.revoke")],
    )],
};

/// Mock `user.authorization.revoke` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationRevoke;

impl MockEvent for AuthorizationRevoke {
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
    fn test_revoke_generates_random_client_id() {
        let payload = payload(&AuthorizationRevoke, &params("revoke"));
        assert_eq!(payload["subscription"]["type"], "user.authorization.revoke");
        assert_eq!(payload["event"]["client_id"].as_str().unwrap().len(), 30);
    }
}
