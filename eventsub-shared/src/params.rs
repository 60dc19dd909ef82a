//! Request parameters for mock event generation.

use crate::STATUS_ENABLED;

/// Everything a descriptor needs to build one mock payload.
///
/// The "to" user is the broadcaster the subscription targets; the "from" user
/// is the viewer, chatter or source channel that caused the event. Optional
/// fields are only read by the event families they make sense for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockEventParameters {
    /// Transport the payload is shaped for (`webhook` or `websocket`).
    pub transport: String,
    /// Trigger the payload was requested with.
    pub trigger: String,
    /// Subscription ID placed in the envelope.
    pub subscription_id: String,
    /// Subscription status; anything but `enabled` omits the event body.
    pub subscription_status: String,
    /// Target broadcaster ID.
    pub to_user_id: String,
    /// Target broadcaster login.
    pub to_user_login: String,
    /// Target broadcaster display name.
    pub to_user_name: String,
    /// Source user ID.
    pub from_user_id: String,
    /// Source user login.
    pub from_user_login: String,
    /// Source user display name.
    pub from_user_name: String,
    /// Correlation / message ID of the notification.
    pub event_message_id: String,
    /// Creation timestamp (RFC 3339).
    pub timestamp: String,
    /// Amount for bits, channel points or viewer counts, depending on the event.
    pub cost: i64,
    /// Subscription tier (`1000`, `2000`, `3000`).
    pub tier: Option<String>,
    /// Whether the acting user is anonymous.
    pub is_anonymous: bool,
    /// Whether a subscription was gifted.
    pub is_gift: bool,
    /// Client ID for authorization, extension and drop events.
    pub client_id: Option<String>,
    /// Free text (chat message, stream title, reward prompt).
    pub description: Option<String>,
    /// Category / game ID.
    pub game_id: Option<String>,
    /// Item or drop ID.
    pub item_id: Option<String>,
    /// End timestamp for a timed ban; `None` means permanent.
    pub ban_end_timestamp: Option<String>,
}

impl MockEventParameters {
    /// Create parameters for a trigger on a transport with an enabled subscription.
    pub fn new(transport: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
            trigger: trigger.into(),
            subscription_status: STATUS_ENABLED.to_string(),
            ..Default::default()
        }
    }

    /// Set the subscription ID.
    pub fn with_subscription_id(mut self, id: impl Into<String>) -> Self {
        self.subscription_id = id.into();
        self
    }

    /// Set the subscription status.
    pub fn with_subscription_status(mut self, status: impl Into<String>) -> Self {
        self.subscription_status = status.into();
        self
    }

    /// Set the target broadcaster; login and display name both use `name`.
    pub fn with_to_user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        self.to_user_id = id.into();
        self.to_user_login = name.to_lowercase();
        self.to_user_name = name;
        self
    }

    /// Set the source user; login and display name both use `name`.
    pub fn with_from_user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        self.from_user_id = id.into();
        self.from_user_login = name.to_lowercase();
        self.from_user_name = name;
        self
    }

    /// Set the notification message ID.
    pub fn with_event_message_id(mut self, id: impl Into<String>) -> Self {
        self.event_message_id = id.into();
        self
    }

    /// Set the creation timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Set the amount used by bits / points / viewer-count events.
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Set the subscription tier.
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Mark the acting user as anonymous.
    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    /// Mark the subscription as a gift.
    pub fn gifted(mut self) -> Self {
        self.is_gift = true;
        self
    }

    /// Set the client ID.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the free text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category / game ID.
    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    /// Set the item / drop ID.
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Make a ban timed, ending at `timestamp`.
    pub fn with_ban_end(mut self, timestamp: impl Into<String>) -> Self {
        self.ban_end_timestamp = Some(timestamp.into());
        self
    }

    /// Whether the subscription status is `enabled`, ignoring case.
    pub fn is_enabled(&self) -> bool {
        self.subscription_status.eq_ignore_ascii_case(STATUS_ENABLED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_enabled() {
        let params = MockEventParameters::new("webhook", "raid");
        assert_eq!(params.transport, "webhook");
        assert_eq!(params.trigger, "raid");
        assert!(params.is_enabled());
        assert_eq!(params.cost, 0);
        assert!(params.tier.is_none());
    }

    #[test]
    fn test_status_check_ignores_case() {
        let params = MockEventParameters::new("webhook", "raid").with_subscription_status("ENABLED");
        assert!(params.is_enabled());

        let pending = params.with_subscription_status("webhook_callback_verification_pending");
        assert!(!pending.is_enabled());
    }

    #[test]
    fn test_user_builders_derive_login() {
        let params = MockEventParameters::new("webhook", "raid")
            .with_to_user("1234", "TestBroadcaster")
            .with_from_user("5678", "TestViewer");

        assert_eq!(params.to_user_id, "1234");
        assert_eq!(params.to_user_login, "testbroadcaster");
        assert_eq!(params.to_user_name, "TestBroadcaster");
        assert_eq!(params.from_user_id, "5678");
        assert_eq!(params.from_user_login, "testviewer");
    }
}
