//! Topic index: sorted topic listings derived from a catalog.

use std::collections::HashSet;

use eventsub_shared::{TRANSPORT_WEBHOOK, TRANSPORT_WEBSOCKET};

use crate::catalog::Catalog;

/// Prefix marking websocket session / command topics.
pub const WEBSOCKET_COMMAND_PREFIX: &str = "websocket";

impl Catalog<'_> {
    /// Every webhook topic, deduplicated and sorted.
    pub fn all_webhook_topics(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut topics: Vec<&'static str> = self
            .iter()
            .flat_map(|event| event.get_all_topics_by_transport(TRANSPORT_WEBHOOK))
            .filter(|topic| seen.insert(*topic))
            .collect();

        topics.sort_unstable();
        topics
    }

    /// Websocket topics that are session commands rather than mirrored
    /// notifications (prefixed `websocket`), sorted.
    pub fn websocket_command_topics(&self) -> Vec<&'static str> {
        let mut topics: Vec<&'static str> = self
            .iter()
            .flat_map(|event| event.get_all_topics_by_transport(TRANSPORT_WEBSOCKET))
            .filter(|topic| topic.starts_with(WEBSOCKET_COMMAND_PREFIX))
            .collect();

        topics.sort_unstable();
        topics
    }
}
