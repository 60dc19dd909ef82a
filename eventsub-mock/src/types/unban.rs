//! `channel.unban`: a viewer was unbanned.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, Moderator, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("unban", "channel.unban")];

static DEFINITION: EventDefinition = EventDefinition {
    name: "unban",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["unban"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.unban` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unban;

#[derive(Serialize)]
struct UnbanEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    moderator: Moderator<'a>,
}

impl MockEvent for Unban {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&UnbanEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
            moderator: Moderator::of(params),
        })
    }
}
