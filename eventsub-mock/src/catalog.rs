//! The fixed, ordered catalog of event descriptors.
//!
//! Catalog order is part of the resolution contract: the first full match
//! wins, and the last version-mismatched match becomes the default when only
//! one version exists.

use std::fmt;

use crate::config::ResolverConfig;
use crate::events::MockEvent;
use crate::types::{
    ad_break::AdBreak,
    authorization_grant::AuthorizationGrant,
    authorization_revoke::AuthorizationRevoke,
    ban::Ban,
    channel_chat::ChannelChatMessage,
    channel_points_redemption::ChannelPointsRedemption,
    channel_points_reward::ChannelPointsReward,
    channel_update::{ChannelUpdateV1, ChannelUpdateV2},
    charity::Charity,
    cheer::Cheer,
    drop::DropEntitlement,
    extension_transaction::ExtensionTransaction,
    follow::Follow,
    gift::Gift,
    goal::Goal,
    hype_train::HypeTrain,
    moderator_change::ModeratorChange,
    poll::Poll,
    prediction::Prediction,
    raid::Raid,
    shield_mode::ShieldMode,
    shoutout::Shoutout,
    stream::{StreamDown, StreamUp},
    subscribe::Subscribe,
    subscription_message::SubscriptionMessage,
    unban::Unban,
    unban_requests::UnbanRequests,
    user_update::UserUpdate,
};

static ALL_EVENTS: &[&dyn MockEvent] = &[
    &AdBreak,
    &AuthorizationGrant,
    &AuthorizationRevoke,
    &Ban,
    &ChannelChatMessage,
    &ChannelPointsRedemption,
    &ChannelPointsReward,
    &Charity,
    &Cheer,
    &DropEntitlement,
    &ExtensionTransaction,
    &Follow,
    &Gift,
    &Goal,
    &HypeTrain,
    &ModeratorChange,
    &Poll,
    &Prediction,
    &Raid,
    &ShieldMode,
    &Shoutout,
    &ChannelUpdateV1,
    &ChannelUpdateV2,
    &StreamUp,
    &StreamDown,
    &Subscribe,
    &SubscriptionMessage,
    &Unban,
    &UnbanRequests,
    &UserUpdate,
];

/// Every built-in event descriptor, in catalog order.
pub fn all_events() -> &'static [&'static dyn MockEvent] {
    ALL_EVENTS
}

/// An ordered view over event descriptors plus the resolver configuration.
///
/// [`Catalog::builtin`] covers every shipped event type. [`Catalog::new`]
/// accepts any ordered slice, which is how embedders and tests supply their
/// own descriptors.
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    events: &'a [&'a dyn MockEvent],
    config: ResolverConfig,
}

impl Catalog<'static> {
    /// The built-in catalog with the default resolver configuration.
    pub fn builtin() -> Self {
        Self::new(ALL_EVENTS)
    }
}

impl<'a> Catalog<'a> {
    /// Create a catalog over `events`, keeping their order.
    pub fn new(events: &'a [&'a dyn MockEvent]) -> Self {
        Self {
            events,
            config: ResolverConfig::default(),
        }
    }

    /// Use `config` for resolution.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The descriptors, in catalog order.
    pub fn events(&self) -> &'a [&'a dyn MockEvent] {
        self.events
    }

    /// Iterate the descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn MockEvent> + 'a {
        self.events.iter().copied()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up a descriptor by its stable name.
    pub fn find_by_name(&self, name: &str) -> Option<&'a dyn MockEvent> {
        self.iter().find(|event| event.name() == name)
    }
}

impl fmt::Debug for Catalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("events", &self.iter().map(|e| e.name()).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 30);
        assert_eq!(catalog.events()[0].name(), "ad_break");
        assert_eq!(catalog.events()[29].name(), "user_update");
        assert_eq!(catalog.events()[28].name(), "unban_requests");

        let names: Vec<_> = catalog.iter().map(|e| e.name()).collect();
        let v1 = names.iter().position(|n| *n == "channel_update_v1").unwrap();
        let v2 = names.iter().position(|n| *n == "channel_update_v2").unwrap();
        assert_eq!(v1 + 1, v2);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all_events().iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), all_events().len());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::builtin();
        let event = catalog.find_by_name("channel_update_v2").unwrap();
        assert_eq!(event.subscription_version(), "2");
        assert!(catalog.find_by_name("missing").is_none());
    }

    #[test]
    fn test_custom_catalog_keeps_order() {
        let events: [&dyn MockEvent; 2] = [&Raid, &AdBreak];
        let catalog = Catalog::new(&events);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.iter().map(|e| e.name()).collect::<Vec<_>>(),
            vec!["raid", "ad_break"]
        );
        assert!(Catalog::new(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_names() {
        let events: [&dyn MockEvent; 1] = [&Raid];
        let rendered = format!("{:?}", Catalog::new(&events));
        assert!(rendered.contains("raid"));
        assert!(rendered.contains("Sequential"));
    }
}
