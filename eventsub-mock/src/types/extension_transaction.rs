//! `extension.bits_transaction.create`: bits were spent in an extension.

use eventsub_shared::{EventsubCondition, MockEventParameters, Transport};
use serde::Serialize;
use serde_json::Value;

use super::{amount_or, to_body, Broadcaster, User, WEBHOOK_ONLY};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const DEFAULT_BITS: i64 = 1;

static DEFINITION: EventDefinition = EventDefinition {
    name: "extension_transaction",
    version: "1",
    transports: WEBHOOK_ONLY,
    triggers: &["transaction"],
    mapping: &[TopicMapping::new(
        Transport::Webhook,
        &[("transaction", "extension.bits_transaction.create")],
    )],
};

/// Mock `extension.bits_transaction.create` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionTransaction;

#[derive(Serialize)]
struct TransactionEvent<'a> {
    id: String,
    extension_client_id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    #[serde(flatten)]
    user: User<'a>,
    product: Product<'a>,
}

#[derive(Serialize)]
struct Product<'a> {
    name: &'static str,
    sku: &'a str,
    bits: i64,
    in_development: bool,
}

fn extension_client_id(params: &MockEventParameters) -> String {
    params
        .client_id
        .clone()
        .unwrap_or_else(random::random_client_id)
}

impl MockEvent for ExtensionTransaction {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn condition(&self, params: &MockEventParameters) -> EventsubCondition {
        EventsubCondition {
            extension_client_id: Some(extension_client_id(params)),
            ..Default::default()
        }
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        to_body(&TransactionEvent {
            id: params.event_message_id.clone(),
            extension_client_id: extension_client_id(params),
            broadcaster: Broadcaster::of(params),
            user: User::of(params),
            product: Product {
                name: "Test Trigger Item from CLI",
                sku: params.item_id.as_deref().unwrap_or("testItemSku"),
                bits: amount_or(params, || DEFAULT_BITS),
                in_development: true,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_transaction_condition_uses_extension_client() {
        let request = params("transaction").with_client_id("ext").with_cost(250);
        let payload = payload(&ExtensionTransaction, &request);

        let condition = &payload["subscription"]["condition"];
        assert_eq!(condition["extension_client_id"], "ext");
        assert!(condition.get("broadcaster_user_id").is_none());

        let body = &payload["event"];
        assert_eq!(body["id"], "msg-1");
        assert_eq!(body["product"]["bits"], 250);
        assert_eq!(body["product"]["sku"], "testItemSku");
    }
}
