//! Topics retired from production.
//!
//! Only old production versions are listed, not beta topics. The resolver
//! never reads this table; callers use it to warn users.

use std::collections::BTreeMap;

/// Retired topic and the last version that was valid for it.
const REMOVED_EVENTS: &[(&str, &str)] = &[("channel.follow", "1")];

/// The last valid version of `topic` if it was removed from production.
pub fn was_removed(topic: &str) -> Option<&'static str> {
    REMOVED_EVENTS
        .iter()
        .find(|(removed, _)| *removed == topic)
        .map(|(_, version)| *version)
}

/// Every removed topic with its last valid version.
pub fn removed_events() -> BTreeMap<&'static str, &'static str> {
    REMOVED_EVENTS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_was_removed() {
        assert_eq!(was_removed("channel.follow"), Some("1"));
        assert_eq!(was_removed("channel.raid"), None);
        assert_eq!(was_removed(""), None);
    }

    #[test]
    fn test_removed_events_lists_table() {
        let removed = removed_events();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.get("channel.follow"), Some(&"1"));
    }
}
