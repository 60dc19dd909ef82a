//! Channel predictions: begin, progress, lock and end.

use eventsub_shared::MockEventParameters;
use serde::Serialize;
use serde_json::Value;

use super::{shift_timestamp, to_body, Broadcaster, User, BOTH_TRANSPORTS};
use crate::errors::EventError;
use crate::events::{EventDefinition, MockEvent, TopicMapping};
use crate::random;

const BEGIN_TOPIC: &str = "channel.prediction.begin";
const LOCK_TOPIC: &str = "channel.prediction.lock";
const END_TOPIC: &str = "channel.prediction.end";

const TOPICS: &[(&str, &str)] = &[
    ("prediction-begin", BEGIN_TOPIC),
    ("prediction-progress", "channel.prediction.progress"),
    ("prediction-lock", LOCK_TOPIC),
    ("prediction-end", END_TOPIC),
];

const OUTCOMES: &[(&str, &str)] = &[("Yes", "blue"), ("No", "pink")];
const MAX_POINTS: i64 = 10_000;
const WINDOW_MINUTES: i64 = 10;

static DEFINITION: EventDefinition = EventDefinition {
    name: "prediction",
    version: "1",
    transports: BOTH_TRANSPORTS,
    triggers: &[
        "prediction-begin",
        "prediction-progress",
        "prediction-lock",
        "prediction-end",
    ],
    mapping: &TopicMapping::mirrored(TOPICS),
};

/// Mock channel prediction events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prediction;

#[derive(Serialize)]
struct Predictor<'a> {
    #[serde(flatten)]
    user: User<'a>,
    channel_points_won: Option<i64>,
    channel_points_used: i64,
}

#[derive(Serialize)]
struct Outcome<'a> {
    id: String,
    title: &'static str,
    color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    users: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_predictors: Option<Vec<Predictor<'a>>>,
}

#[derive(Serialize)]
struct PredictionEvent<'a> {
    id: String,
    #[serde(flatten)]
    broadcaster: Broadcaster<'a>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    winning_outcome_id: Option<String>,
    outcomes: Vec<Outcome<'a>>,
    started_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    locks_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locked_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
}

impl MockEvent for Prediction {
    fn definition(&self) -> &'static EventDefinition {
        &DEFINITION
    }

    fn event_body(&self, topic: &str, params: &MockEventParameters) -> Result<Value, EventError> {
        let ended = topic == END_TOPIC;
        let counted = topic != BEGIN_TOPIC;

        let outcomes: Vec<Outcome> = OUTCOMES
            .iter()
            .enumerate()
            .map(|(index, &(title, color))| {
                let used = random::random_int(MAX_POINTS) + 1;
                // The first outcome wins when the prediction resolves.
                let won = (ended && index == 0).then_some(used * 2);
                Outcome {
                    id: random::random_guid(),
                    title,
                    color,
                    users: counted.then_some(1),
                    channel_points: counted.then_some(used),
                    top_predictors: counted.then(|| {
                        vec![Predictor {
                            user: User::of(params),
                            channel_points_won: won,
                            channel_points_used: used,
                        }]
                    }),
                }
            })
            .collect();

        let winning_outcome_id = if ended {
            outcomes.first().map(|outcome| outcome.id.clone())
        } else {
            None
        };

        let (locks_at, locked_at, ended_at, status) = match topic {
            LOCK_TOPIC => (None, Some(params.timestamp.as_str()), None, None),
            END_TOPIC => (None, None, Some(params.timestamp.as_str()), Some("resolved")),
            _ => (
                Some(shift_timestamp(&params.timestamp, WINDOW_MINUTES)),
                None,
                None,
                None,
            ),
        };

        to_body(&PredictionEvent {
            id: params.item_id.clone().unwrap_or_else(random::random_guid),
            broadcaster: Broadcaster::of(params),
            title: params.description.as_deref().unwrap_or("Will the developer finish this program?"),
            winning_outcome_id,
            outcomes,
            started_at: &params.timestamp,
            locks_at,
            locked_at,
            ended_at,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{params, payload};

    #[test]
    fn test_prediction_begin() {
        let begin = payload(&Prediction, &params("prediction-begin"));
        let body = &begin["event"];
        assert_eq!(body["locks_at"], "2024-05-01T12:10:00Z");
        assert_eq!(body["outcomes"][0]["color"], "blue");
        assert!(body["outcomes"][0].get("top_predictors").is_none());
        assert!(body.get("winning_outcome_id").is_none());
    }

    #[test]
    fn test_prediction_lock() {
        let lock = payload(&Prediction, &params("prediction-lock"));
        let body = &lock["event"];
        assert_eq!(body["locked_at"], "2024-05-01T12:00:00Z");
        assert!(body.get("locks_at").is_none());
        assert_eq!(body["outcomes"][1]["top_predictors"][0]["user_id"], "5678");
        assert!(body["outcomes"][1]["top_predictors"][0]["channel_points_won"].is_null());
    }

    #[test]
    fn test_prediction_end_names_winner() {
        let end = payload(&Prediction, &params("prediction-end"));
        let body = &end["event"];
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["winning_outcome_id"], body["outcomes"][0]["id"]);
        assert!(body["outcomes"][0]["top_predictors"][0]["channel_points_won"].is_i64());
    }
}
