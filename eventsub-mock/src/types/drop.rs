//! `drop.entitlement.grant`: a batch of drop entitlements was granted.
//!
//! Unlike other families the event body is an array of grants.

use eventsub_shared::{EventsubCondition, MockEventParameters, Transport};
use serde::Serialize;
use serde_json::Value;

use super::{to_body, User, WEBHOOK_ONLY};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

static DEFINITION: EventDefinition = EventDefinition {
    name: "drop",
    version: "1",
    transports: WEBHOOK_ONLY,
    triggers: &["drop"],
    mapping: &[TopicMapping::new(
        Transport::Webhook,
        &[("drop", "drop.entitlement.grant")],
    )],
};

/// Mock `drop.entitlement.grant` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropEntitlement;

#[derive(Serialize)]
struct DropGrant<'a> {
    id: String,
    data: DropGrantData<'a>,
}

#[derive(Serialize)]
struct DropGrantData<'a> {
    organization_id: String,
    category_id: &'a str,
    category_name: &'static str,
    campaign_id: String,
    #[serde(flatten)]
    user: User<'a>,
    entitlement_id: String,
    benefit_id: String,
    created_at: &'a str,
}

fn organization_id(params: &MockEventParameters) -> String {
    params.client_id.clone().unwrap_or_else(random::random_guid)
}

impl MockEvent for DropEntitlement {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition {
            organization_id: Some(organization_id(params)),
            category_id: params.game_id.clone(),
            ..Default::default()
        }
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let grants = [DropGrant {
            id: random::random_guid(),
            data: DropGrantData {
                organization_id: organization_id(params),
                category_id: params.game_id.as_deref().unwrap_or("33214"),
                category_name: "Fortnite",
                campaign_id: random::random_guid(),
                user: User::of(params),
                entitlement_id: random::random_guid(),
                benefit_id: params.item_id.clone().unwrap_or_else(random::random_guid),
                created_at: &params.timestamp,
            },
        }];
        to_body(&grants[..])
    }
}
