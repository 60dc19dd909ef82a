//! `channel.chat.message`: a chat message was sent in the channel.

use eventsub_shared::{EventsubCondition, MockEventParameters};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const TOPICS: &[(&str, &str)] = &[("message", "channel.chat.message")];

const DEFAULT_TEXT: &str = "Hello, world! This is a test event";

static DEFINITION: EventDefinition = EventDefinition {
    name: "channel_chat_message",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["message"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.chat.message` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelChatMessage;

#[derive(Serialize)]
struct ChatMessageEvent<'a> {
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    chatter_user_id: &'a str,
    chatter_user_login: &'a str,
    chatter_user_name: &'a str,
    message_id: String,
    message: ChatMessage<'a>,
    color: String,
    badges: Vec<Value>,
    message_type: &'static str,
    cheer: Option<Value>,
    reply: Option<Value>,
    channel_points_custom_reward_id: Option<&'a str>,
    channel_points_animation_id: Option<&'a str>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    text: &'a str,
    fragments: Vec<TextFragment<'a>>,
}

#[derive(Serialize)]
struct TextFragment<'a> {
    #[serde(rename = "type")]
    fragment_type: &'static str,
    text: &'a str,
    cheermote: Option<Value>,
    emote: Option<Value>,
    mention: Option<Value>,
}

impl MockEvent for ChannelChatMessage {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition::broadcaster(&params.to_user_id).with_user(&params.from_user_id)
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let text = params.description.as_deref().unwrap_or(DEFAULT_TEXT);

        to_body(&ChatMessageEvent {
            broadcaster: Broadcaster::of(params),
            chatter_user_id: &params.from_user_id,
            chatter_user_login: &params.from_user_login,
            chatter_user_name: &params.from_user_name,
            message_id: random::random_guid(),
            message: ChatMessage {
                text,
                fragments: vec![TextFragment {
                    fragment_type: "text",
                    text,
                    cheermote: None,
                    emote: None,
                    mention: None,
                }],
            },
            color: random::random_color_hex(),
            badges: Vec::new(),
            message_type: "text",
            cheer: None,
            reply: None,
            channel_points_custom_reward_id: params.item_id.as_deref(),
            channel_points_animation_id: None,
        })
    }
}
