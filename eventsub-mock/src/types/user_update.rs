//! `user.update`: a user changed their account details.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("user-update", "user.update")];

static DEFINITION: EventDefinition = EventDefinition {
    name: "user_update",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["user-update"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `user.update` event. The "to" user is the one updated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserUpdate;

#[derive(Serialize)]
struct UserUpdateEvent<'a> {
    user_id: &'a str,
    user_login: &'a str,
    user_name: &'a str,
    email: &'static str,
    email_verified: bool,
    description: &'a str,
}

impl MockEvent for UserUpdate {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::user(&params.to_user_id)
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&UserUpdateEvent {
            user_id: &params.to_user_id,
            user_login: &params.to_user_login,
            user_name: &params.to_user_name,
            email: "user@email.com",
            email_verified: true,
            description: params.description.as_deref().unwrap_or("cool description"),
        })
    }
}
