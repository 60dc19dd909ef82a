//! Trigger resolution.
//!
//! Turns a (trigger, transport, version) request into exactly one event
//! descriptor. The trigger may also be a canonical topic string (an alias),
//! which is rewritten to the trigger name that produces it under webhooks.

use eventsub_shared::{TRANSPORT_WEBHOOK, TRANSPORT_WEBSOCKET};
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::config::AliasMode;
use crate::errors::ResolveError;
use crate::events::MockEvent;

impl<'a> Catalog<'a> {
    /// Resolve a request to one descriptor.
    ///
    /// Descriptors are scanned in catalog order:
    ///
    /// 1. On `webhook` / `websocket`, alias rewriting runs according to the
    ///    configured [`AliasMode`]. In sequential mode a rewrite persists for
    ///    the rest of the scan.
    /// 2. A descriptor matching trigger, transport and version is returned at
    ///    once.
    /// 3. A descriptor matching trigger and transport at another version is
    ///    remembered as a candidate.
    ///
    /// With no version given and exactly one candidate, that candidate is the
    /// answer. Otherwise candidates produce
    /// [`ResolveError::AmbiguousOrInvalidVersion`]; with none, websocket
    /// requests get [`ResolveError::UnsupportedOnTransport`] and everything
    /// else [`ResolveError::UnknownEvent`].
    #[instrument(skip(self), fields(alias_mode = %self.config().alias_mode))]
    pub fn resolve(
        &self,
        trigger: &str,
        transport: &str,
        version: &str,
    ) -> Result<&'a dyn MockEvent, ResolveError> {
        let alias_mode = self.config().alias_mode;
        let aliasable = transport == TRANSPORT_WEBHOOK || transport == TRANSPORT_WEBSOCKET;

        let mut search = trigger;
        if aliasable && alias_mode == AliasMode::Normalized {
            if let Some(alias) = self.iter().find_map(|event| event.get_eventsub_alias(search)) {
                debug!(from = search, to = alias, "Normalized topic alias to trigger");
                search = alias;
            }
        }

        let mut bad_versions: Vec<&'static str> = Vec::new();
        let mut latest_seen: Option<&'a dyn MockEvent> = None;

        for event in self.iter() {
            if aliasable && alias_mode == AliasMode::Sequential {
                if let Some(alias) = event.get_eventsub_alias(search) {
                    debug!(
                        event = event.name(),
                        from = search,
                        to = alias,
                        "Rewrote topic alias to trigger"
                    );
                    search = alias;
                }
            }

            if !(event.valid_trigger(search) && event.valid_transport(transport)) {
                continue;
            }

            if event.subscription_version() == version {
                debug!(event = event.name(), "Resolved event");
                return Ok(event);
            }

            bad_versions.push(event.subscription_version());
            latest_seen = Some(event);
        }

        // A trigger with a single known version needs no explicit version.
        if version.is_empty() && bad_versions.len() == 1 {
            if let Some(event) = latest_seen {
                debug!(event = event.name(), "Resolved event by default version");
                return Ok(event);
            }
        }

        if !bad_versions.is_empty() {
            debug!(?bad_versions, "No descriptor matched the requested version");
            return Err(ResolveError::invalid_version(bad_versions, version.is_empty()));
        }

        if transport.eq_ignore_ascii_case(TRANSPORT_WEBSOCKET) {
            return Err(ResolveError::unsupported_on_transport(trigger));
        }

        Err(ResolveError::unknown_event(trigger, transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::errors::EventError;
    use crate::events::{EventDefinition, TopicMapping};
    use crate::types::to_body;
    use eventsub_shared::{MockEventParameters, Transport};
    use serde_json::{json, Value};

    macro_rules! test_event {
        ($ty:ident, $def:ident, $name:expr, $version:expr, $transports:expr, $triggers:expr, $mapping:expr) => {
            static $def: EventDefinition = EventDefinition {
                name: $name,
                version: $version,
                transports: $transports,
                triggers: $triggers,
                mapping: $mapping,
            };

            struct $ty;

            impl MockEvent for $ty {
                fn definition(&self) -> &'static EventDefinition {
                    &$def
                }

                fn event_body(&self, _topic: &str, _params: &MockEventParameters) -> Result<Value, EventError> {
                    to_body(&json!({}))
                }
            }
        };
    }

    const BOTH: &[Transport] = &[Transport::Webhook, Transport::WebSocket];

    test_event!(WidgetV1, WIDGET_V1, "widget_v1", "1", BOTH, &["widget"],
        &TopicMapping::mirrored(&[("widget", "channel.widget")]));
    test_event!(WidgetV2, WIDGET_V2, "widget_v2", "2", BOTH, &["widget"],
        &TopicMapping::mirrored(&[("widget", "channel.widget")]));
    test_event!(Gadget, GADGET, "gadget", "1", BOTH, &["gadget"],
        &TopicMapping::mirrored(&[("gadget", "channel.gadget")]));
    test_event!(GadgetTwin, GADGET_TWIN, "gadget_twin", "1", BOTH, &["gadget"],
        &TopicMapping::mirrored(&[("gadget", "channel.gadget")]));
    test_event!(Hook, HOOK, "hook", "1", &[Transport::Webhook], &["hook"],
        &[TopicMapping::new(Transport::Webhook, &[("hook", "app.hook")])]);
    // Its webhook topic is spelled like another descriptor's trigger.
    test_event!(Shadow, SHADOW, "shadow", "1", BOTH, &["shadow"],
        &TopicMapping::mirrored(&[("shadow", "gadget")]));

    fn catalog<'a>(events: &'a [&'a dyn MockEvent]) -> Catalog<'a> {
        Catalog::new(events)
    }

    #[test]
    fn test_exact_version_match() {
        let events: [&dyn MockEvent; 3] = [&WidgetV1, &WidgetV2, &Gadget];
        let resolved = catalog(&events).resolve("widget", "webhook", "2").unwrap();
        assert_eq!(resolved.name(), "widget_v2");
    }

    #[test]
    fn test_first_full_match_wins() {
        let events: [&dyn MockEvent; 2] = [&Gadget, &GadgetTwin];
        let resolved = catalog(&events).resolve("gadget", "webhook", "1").unwrap();
        assert_eq!(resolved.name(), "gadget");

        let events: [&dyn MockEvent; 2] = [&GadgetTwin, &Gadget];
        let resolved = catalog(&events).resolve("gadget", "webhook", "1").unwrap();
        assert_eq!(resolved.name(), "gadget_twin");
    }

    #[test]
    fn test_missing_version_with_two_versions_is_ambiguous() {
        let events: [&dyn MockEvent; 2] = [&WidgetV1, &WidgetV2];
        let err = catalog(&events).resolve("widget", "webhook", "").unwrap_err();
        assert_eq!(err, ResolveError::invalid_version(["1", "2"], true));
        assert!(err.to_string().ends_with("\nUse --version to specify"));
    }

    #[test]
    fn test_wrong_version_lists_valid_versions() {
        let events: [&dyn MockEvent; 2] = [&WidgetV1, &WidgetV2];
        let err = catalog(&events).resolve("widget", "websocket", "7").unwrap_err();
        assert_eq!(err, ResolveError::invalid_version(["1", "2"], false));
    }

    #[test]
    fn test_single_version_is_default() {
        let events: [&dyn MockEvent; 2] = [&WidgetV1, &Gadget];
        let resolved = catalog(&events).resolve("gadget", "webhook", "").unwrap();
        assert_eq!(resolved.name(), "gadget");
    }

    #[test]
    fn test_duplicate_versions_are_still_ambiguous() {
        let events: [&dyn MockEvent; 2] = [&Gadget, &GadgetTwin];
        let err = catalog(&events).resolve("gadget", "webhook", "").unwrap_err();
        assert_eq!(err, ResolveError::invalid_version(["1"], true));
    }

    #[test]
    fn test_unknown_trigger() {
        let events: [&dyn MockEvent; 2] = [&WidgetV1, &Hook];
        let err = catalog(&events).resolve("not-a-real-trigger", "webhook", "").unwrap_err();
        assert_eq!(err, ResolveError::unknown_event("not-a-real-trigger", "webhook"));
    }

    #[test]
    fn test_webhook_only_trigger_on_websocket() {
        let events: [&dyn MockEvent; 2] = [&WidgetV1, &Hook];
        let err = catalog(&events).resolve("hook", "websocket", "").unwrap_err();
        assert_eq!(err, ResolveError::unsupported_on_transport("hook"));

        // Case-insensitive for the error choice, but not a valid transport.
        let err = catalog(&events).resolve("hook", "WebSocket", "").unwrap_err();
        assert_eq!(err, ResolveError::unsupported_on_transport("hook"));
    }

    #[test]
    fn test_unknown_transport() {
        let events: [&dyn MockEvent; 1] = [&Hook];
        let err = catalog(&events).resolve("hook", "carrier", "").unwrap_err();
        assert_eq!(err, ResolveError::unknown_event("hook", "carrier"));
    }

    #[test]
    fn test_topic_alias_resolves() {
        let events: [&dyn MockEvent; 3] = [&Gadget, &WidgetV1, &WidgetV2];
        let resolved = catalog(&events).resolve("channel.widget", "websocket", "1").unwrap();
        assert_eq!(resolved.name(), "widget_v1");
    }

    #[test]
    fn test_alias_not_applied_on_other_transports() {
        let events: [&dyn MockEvent; 1] = [&Gadget];
        let err = catalog(&events).resolve("channel.gadget", "carrier", "").unwrap_err();
        assert_eq!(err, ResolveError::unknown_event("channel.gadget", "carrier"));
    }

    #[test]
    fn test_sequential_rewrite_persists_for_rest_of_scan() {
        // Shadow is scanned first. Its webhook topic is "gadget", so the
        // trigger becomes "shadow" and Gadget is never a candidate.
        let events: [&dyn MockEvent; 2] = [&Shadow, &Gadget];
        let resolved = catalog(&events).resolve("gadget", "webhook", "").unwrap();
        assert_eq!(resolved.name(), "shadow");

        // With Gadget first it matches before the rewrite, then the rewrite
        // lands and Shadow becomes a second candidate.
        let events: [&dyn MockEvent; 2] = [&Gadget, &Shadow];
        let err = catalog(&events).resolve("gadget", "webhook", "").unwrap_err();
        assert_eq!(err, ResolveError::invalid_version(["1"], true));
    }

    #[test]
    fn test_normalized_rewrites_once_before_scan() {
        let config = ResolverConfig::default().with_alias_mode(AliasMode::Normalized);
        let events: [&dyn MockEvent; 2] = [&Gadget, &Shadow];
        let resolved = catalog(&events)
            .with_config(config)
            .resolve("gadget", "webhook", "")
            .unwrap();
        assert_eq!(resolved.name(), "shadow");

        let resolved = catalog(&events)
            .with_config(config)
            .resolve("channel.gadget", "webhook", "1")
            .unwrap();
        assert_eq!(resolved.name(), "gadget");
    }
}
