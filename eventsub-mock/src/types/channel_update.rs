//! `channel.update`, in its two schema versions.
//!
//! Both versions answer the same trigger, so requests without a version are
//! ambiguous and have to name one.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("channel-update", "channel.update")];
const TRIGGERS: &[&str] = &["channel-update"];

const DEFAULT_TITLE: &str = "Best Stream Ever";
const DEFAULT_CATEGORY_ID: &str = "509658";
const DEFAULT_CATEGORY_NAME: &str = "Just Chatting";

static DEFINITION_V1: EventDefinition = EventDefinition {
    name: "channel_update_v1",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: TRIGGERS,
    mapping: &TopicMapping::mirrored(TOPICS),
};

static DEFINITION_V2: EventDefinition = EventDefinition {
    name: "channel_update_v2",
    version: "2",
    transports: BOTH_TRANSPORTS,
    triggers: TRIGGERS,
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.update` version 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelUpdateV1;

/// Mock `channel.update` version 2, with content classification labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelUpdateV2;

#[derive(Serialize)]
struct ChannelInfo<'a> {
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    title: &'a str,
    language: &'static str,
    category_id: &'a str,
    category_name: &'static str,
}

impl<'a> ChannelInfo<'a> {
    fn of(params: &'a MockEventParameters) -> Self {
        Self {
            broadcaster: Broadcaster::of(params),
            title: params.description.as_deref().unwrap_or(DEFAULT_TITLE),
            language: "en",
            category_id: params.game_id.as_deref().unwrap_or(DEFAULT_CATEGORY_ID),
            category_name: DEFAULT_CATEGORY_NAME,
        }
    }
}

#[derive(Serialize)]
struct ChannelUpdateV1Event<'a> {
    #[serde(flatten)]
    info: ChannelInfo<'a>,
    is_mature: bool,
}

#[derive(Serialize)]
struct ChannelUpdateV2Event<'a> {
    #[serde(flatten)]
    info: ChannelInfo<'a>,
    content_classification_labels: Vec<&'static str>,
}

impl MockEvent for ChannelUpdateV1 {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION_V1
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&ChannelUpdateV1Event {
            info: ChannelInfo::of(params),
            is_mature: false,
        })
    }
}

impl MockEvent for ChannelUpdateV2 {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION_V2
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&ChannelUpdateV2Event {
            info: ChannelInfo::of(params),
            content_classification_labels: Vec::new(),
        })
    }
}
