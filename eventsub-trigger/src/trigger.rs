//! The `trigger` and `topics` commands.

use chrono::{SecondsFormat, Utc};
use eventsub_mock::{random, was_removed, Catalog, MockEvent};
use eventsub_shared::{MockEventParameters, TRANSPORT_WEBHOOK};
use tracing::{info, warn};

use crate::{TopicsArgs, TriggerArgs, TriggerConfig, TriggerError};

const DEFAULT_TO_USER_NAME: &str = "testBroadcaster";
const DEFAULT_FROM_USER_NAME: &str = "testFromUser";

/// Build generation parameters from the arguments, filling in random IDs
/// and the current time where none were given.
pub fn build_parameters(args: &TriggerArgs, transport: &str) -> MockEventParameters {
    let to_user = args.to_user.clone().unwrap_or_else(random::random_user_id);
    let from_user = args.from_user.clone().unwrap_or_else(random::random_user_id);
    let timestamp = args
        .timestamp
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true));

    let mut params = MockEventParameters::new(transport, args.event.as_str())
        .with_subscription_status(args.subscription_status.as_str())
        .with_subscription_id(args.subscription_id.clone().unwrap_or_else(random::random_guid))
        .with_event_message_id(args.event_id.clone().unwrap_or_else(random::random_guid))
        .with_to_user(to_user, DEFAULT_TO_USER_NAME)
        .with_from_user(from_user, DEFAULT_FROM_USER_NAME)
        .with_timestamp(timestamp)
        .with_cost(args.cost);

    if args.anonymous {
        params = params.anonymous();
    }
    if args.gift {
        params = params.gifted();
    }
    params.tier = args.tier.clone();
    params.client_id = args.client_id.clone();
    params.description = args.description.clone();
    params.game_id = args.game_id.clone();
    params.item_id = args.item_id.clone();
    params.ban_end_timestamp = args.ban_end.clone();
    params
}

/// The retired topic and version a trigger refers to, if any.
///
/// `trigger` may be the topic itself or a trigger name whose webhook topic
/// was retired.
pub fn removed_topic(catalog: &Catalog<'_>, trigger: &str) -> Option<(&'static str, &'static str)> {
    let topic = catalog
        .iter()
        .find_map(|event| event.get_topic(TRANSPORT_WEBHOOK, trigger))
        .unwrap_or(trigger);

    catalog
        .iter()
        .flat_map(|event| event.get_all_topics_by_transport(TRANSPORT_WEBHOOK))
        .find(|known| *known == topic)
        .and_then(|known| was_removed(known).map(|version| (known, version)))
}

/// Resolve and generate the payload for `args`, returning its JSON.
pub fn trigger_event(
    catalog: &Catalog<'_>,
    args: &TriggerArgs,
    config: &TriggerConfig,
) -> Result<String, TriggerError> {
    let transport = args
        .transport
        .as_deref()
        .unwrap_or_else(|| config.transport.as_str());

    let event = match catalog.resolve(&args.event, transport, &args.version) {
        Ok(event) => event,
        Err(err) => {
            if let Some((topic, version)) = removed_topic(catalog, &args.event) {
                if args.version.is_empty() || args.version == version {
                    warn!(topic, version, "This topic version has been removed from production");
                }
            }
            return Err(err.into());
        }
    };

    let params = build_parameters(args, transport);
    let response = event
        .generate_event(&params)?
        .ok_or_else(|| TriggerError::NothingGenerated {
            event: event.name().to_string(),
            transport: transport.to_string(),
        })?;

    info!(
        event = event.name(),
        version = event.subscription_version(),
        transport,
        id = %response.id,
        "Generated mock event"
    );

    Ok(response.json)
}

/// The topic listing for `args`.
pub fn list_topics(catalog: &Catalog<'_>, args: &TopicsArgs) -> Vec<&'static str> {
    if args.websocket {
        catalog.websocket_command_topics()
    } else {
        catalog.all_webhook_topics()
    }
}
