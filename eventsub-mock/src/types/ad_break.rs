//! `channel.ad_break.begin`: an ad break started on the channel.

use eventsub_shared::MockEventParameters;
use rand::seq::SliceRandom;
use serde::Serialize;
use serde_json::Value;

use super::{to_body, Broadcaster, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};

const TOPICS: &[(&str, &str)] = &[("ad-break", "channel.ad_break.begin")];

/// Ad break lengths a broadcaster can pick, in seconds.
const DURATIONS: &[i64] = &[30, 60, 90, 120, 150, 180];

static DEFINITION: EventDefinition = EventDefinition {
    name: "ad_break",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &["ad-break"],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock `channel.ad_break.begin` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdBreak;

#[derive(Serialize)]
struct AdBreakBeginEvent<'a> {
    duration_seconds: i64,
    started_at: &'a str,
    is_automatic: bool,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    requester_user_id: &'a str,
    requester_user_login: &'a str,
    requester_user_name: &'a str,
}

impl MockEvent for AdBreak {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, _topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let duration_seconds = if params.cost > 0 {
            params.cost
        } else {
            DURATIONS.choose(&mut rand::thread_rng()).copied().unwrap_or(60)
        };

        to_body(&AdBreakBeginEvent {
            duration_seconds,
            started_at: &params.timestamp,
            is_automatic: false,
            broadcaster: Broadcaster::of(params),
            requester_user_id: &params.from_user_id,
            requester_user_login: &params.from_user_login,
            requester_user_name: &params.from_user_name,
        })
    }
}
