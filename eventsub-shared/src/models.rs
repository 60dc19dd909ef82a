//! EventSub envelope models.
//!
//! Every mock payload is an [`EventsubResponse`]: subscription metadata that
//! is always present, wrapping an event body that is only present while the
//! subscription is enabled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::Transport;

/// Top level payload: subscription metadata plus the optional event body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsubResponse {
    pub subscription: EventsubSubscription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
}

/// Subscription metadata carried by every notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsubSubscription {
    pub id: String,
    pub status: String,
    /// The topic, e.g. `channel.chat.message`.
    #[serde(rename = "type")]
    pub subscription_type: String,
    pub version: String,
    pub condition: EventsubCondition,
    pub transport: EventsubTransport,
    pub cost: i64,
    pub created_at: String,
}

/// Subscription condition. Only the fields an event family uses are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsubCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcaster_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_broadcaster_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_broadcaster_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl EventsubCondition {
    /// Condition scoped to a broadcaster.
    pub fn broadcaster(broadcaster_user_id: impl Into<String>) -> Self {
        Self {
            broadcaster_user_id: Some(broadcaster_user_id.into()),
            ..Default::default()
        }
    }

    /// Condition scoped to a single user.
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    /// Condition scoped to an application client ID.
    pub fn client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Default::default()
        }
    }

    /// Add a user ID to the condition.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Add a moderator user ID to the condition.
    pub fn with_moderator(mut self, moderator_user_id: impl Into<String>) -> Self {
        self.moderator_user_id = Some(moderator_user_id.into());
        self
    }
}

/// Transport block of the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsubTransport {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl EventsubTransport {
    /// Transport block for a mock notification on `transport`.
    ///
    /// Mock webhooks have no real callback, so it is rendered as `"null"`.
    pub fn mock(transport: Transport) -> Self {
        let callback = match transport {
            Transport::Webhook => Some("null".to_string()),
            Transport::WebSocket => None,
        };
        Self {
            method: transport.as_str().to_string(),
            callback,
            session_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subscription() -> EventsubSubscription {
        EventsubSubscription {
            id: "sub-1".to_string(),
            status: "enabled".to_string(),
            subscription_type: "channel.raid".to_string(),
            version: "1".to_string(),
            condition: EventsubCondition::broadcaster("1234"),
            transport: EventsubTransport::mock(Transport::Webhook),
            cost: 0,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_event_key_omitted_when_none() {
        let response = EventsubResponse {
            subscription: subscription(),
            event: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("subscription").is_some());
        assert!(value.get("event").is_none());
    }

    #[test]
    fn test_subscription_shape() {
        let value = serde_json::to_value(subscription()).unwrap();
        assert_eq!(value["type"], "channel.raid");
        assert_eq!(value["condition"], json!({ "broadcaster_user_id": "1234" }));
        assert_eq!(value["transport"], json!({ "method": "webhook", "callback": "null" }));
    }

    #[test]
    fn test_websocket_transport_has_no_callback() {
        let transport = EventsubTransport::mock(Transport::WebSocket);
        assert_eq!(transport.method, "websocket");
        assert!(transport.callback.is_none());
    }

    #[test]
    fn test_condition_builders() {
        let condition = EventsubCondition::broadcaster("1").with_moderator("1").with_user("2");
        assert_eq!(condition.broadcaster_user_id.as_deref(), Some("1"));
        assert_eq!(condition.moderator_user_id.as_deref(), Some("1"));
        assert_eq!(condition.user_id.as_deref(), Some("2"));
        assert!(condition.client_id.is_none());
    }
}
