//! `channel.moderator.add` and `channel.moderator.remove`.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[
    ("add-moderator", "channel.moderator.add"),
    ("remove-moderator", "channel.moderator.remove"),
];

static DEFINITION: EventDefinition = EventDefinition {
    name: "moderator_change",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["add-moderator", "remove-moderator"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock moderator add / remove events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeratorChange;

#[derive(Serialize)]
struct ModeratorChangeEvent<'a> {
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
}

impl MockEvent for ModeratorChange {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&ModeratorChangeEvent {
            user: User::of(params),
            broadcaster: Broadcaster::of(params),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_trigger_picks_topic() {
        let added = payload(&ModeratorChange, &params("add-moderator"));
        assert_eq!(added["subscription"]["type"], "channel.moderator.add");

        let removed = payload(&ModeratorChange, &params("remove-moderator"));
        assert_eq!(removed["subscription"]["type"], "channel.moderator.remove");
        assert_eq!(removed["event"]["user_id"], "5678");
    }
}
