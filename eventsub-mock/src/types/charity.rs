//! Charity campaigns: donations, start, progress and stop.
//!
//! Donations carry the donor and the donated amount; the other topics
//! describe the campaign itself.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const DONATE_TOPIC: &str = "channel.charity_campaign.donate";
const START_TOPIC: &str = "channel.charity_campaign.start";
const STOP_TOPIC: &str = "channel.charity_campaign.stop";

const TOPICS: &[(&str, &str)] = &[
    ("charity-donate", DONATE_TOPIC),
    ("charity-start", START_TOPIC),
    ("charity-progress", "channel.charity_campaign.progress"),
    ("charity-stop", STOP_TOPIC),
];

// Amounts are in the smallest currency unit, with two decimal places.
const DEFAULT_DONATION: i64 = 500;
const DEFAULT_TARGET: i64 = 1_500_000;
const MAX_RAISED: i64 = 1_000_000;

static DEFINITION: EventDefinition = EventDefinition {
    name: "charity",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["charity-donate", "charity-start", "charity-progress", "charity-stop"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock charity campaign events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Charity;

#[derive(Serialize)]
struct CharityInfo {
    charity_name: &'static str,
    charity_description: &'static str,
    charity_logo: &'static str,
    charity_website: &'static str,
}

const CHARITY: CharityInfo = CharityInfo {
    charity_name: "Example Charity",
    charity_description: "An example charity",
    charity_logo: "https://abc.cloudfront.net/ppgf/1000/100.png",
    charity_website: "https://www.example.com",
};

#[derive(Serialize)]
struct Amount {
    value: i64,
    decimal_places: u8,
    currency: &'static str,
}

impl Amount {
    fn usd(value: i64) -> Self {
        Self {
            value,
            decimal_places: 2,
            currency: "USD",
        }
    }
}

#[derive(Serialize)]
struct DonationEvent<'a> {
    id: String,
    campaign_id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    user: User<'a>,
    #[serde(flatten)]
    charity: CharityInfo,
    amount: Amount,
}

#[derive(Serialize)]
struct CampaignEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    charity: CharityInfo,
    current_amount: Amount,
    target_amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopped_at: Option<&'a str>,
}

fn campaign_id(params: &MockEventParameters) -> String {
    params.item_id.clone().unwrap_or_else(random::random_guid)
}

impl MockEvent for Charity {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        if topic == DONATE_TOPIC {
            return to_body(&DonationEvent {
                id: random::random_guid(),
                campaign_id: campaign_id(params),
                broadcaster: Broadcaster::of(params),
                user: User::of(params),
                charity: CHARITY,
                amount: Amount::usd(amount_or(params, || DEFAULT_DONATION)),
            });
        }

        let current = if topic == START_TOPIC {
            0
        } else {
            amount_or(params, || random::random_int(MAX_RAISED))
        };

        to_body(&CampaignEvent {
            id: campaign_id(params),
            broadcaster: Broadcaster::of(params),
            charity: CHARITY,
            current_amount: Amount::usd(current),
            target_amount: Amount::usd(DEFAULT_TARGET),
            started_at: (topic == START_TOPIC).then_some(params.timestamp.as_str()),
            stopped_at: (topic == STOP_TOPIC).then_some(params.timestamp.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_donation_body() {
        let payload = payload(&Charity, &params("charity-donate").with_item_id("campaign"));
        let body = &payload["event"];
        assert_eq!(body["campaign_id"], "campaign");
        assert_eq!(body["user_id"], "5678");
        assert_eq!(body["amount"]["value"], DEFAULT_DONATION);
        assert_eq!(body["amount"]["currency"], "USD");
        assert_eq!(body["charity_name"], "Example Charity");
    }

    #[test]
    fn test_campaign_timestamps_follow_topic() {
        let start = payload(&Charity, &params("charity-start"));
        assert_eq!(start["event"]["started_at"], "2024-05-01T12:00:00Z");
        assert_eq!(start["event"]["current_amount"]["value"], 0);
        assert!(start["event"].get("stopped_at").is_none());

        let stop = payload(&Charity, &params("charity-stop"));
        assert_eq!(stop["event"]["stopped_at"], "2024-05-01T12:00:00Z");
        assert!(stop["event"].get("started_at").is_none());

        let progress = payload(&Charity, &params("charity-progress").with_cost(42));
        assert_eq!(progress["event"]["current_amount"]["value"], 42);
        assert!(progress["event"].get("user_id").is_none());
    }
}
