//! Event descriptor implementations, one module per event family.
//!
//! Bodies share a few flattened user blocks so every family renders the
//! `*_user_id` / `*_user_login` / `*_user_name` triples the same way.

pub mod ad_break;
pub mod authorization_grant;
pub mod authorization_revoke;
pub mod ban;
pub mod channel_chat;
pub mod channel_points_redemption;
pub mod channel_points_reward;
pub mod channel_update;
pub mod charity;
pub mod cheer;
pub mod drop;
pub mod extension_transaction;
pub mod follow;
pub mod gift;
pub mod goal;
pub mod hype_train;
pub mod moderator_change;
pub mod poll;
pub mod prediction;
pub mod raid;
pub mod shield_mode;
pub mod shoutout;
pub mod stream;
pub mod subscribe;
pub mod subscription_message;
pub mod unban;
pub mod unban_requests;
pub mod user_update;

use chrono::{DateTime, Duration, SecondsFormat};
use eventsub_shared::{MockEventParameters, Transport};
use serde::Serialize;
use serde_json::Value;

use crate::errors::EventError;

/// Events delivered over both webhooks and websockets.
pub(crate) const BOTH_TRANSPORTS: &[Transport] = &[Transport::Webhook, Transport::WebSocket];

/// Events only delivered over webhooks.
pub(crate) const WEBHOOK_ONLY: &[Transport] = &[Transport::Webhook];

/// Tier used when the request does not name one.
pub(crate) const DEFAULT_TIER: &str = "1000";

/// Serialize an event body.
pub(crate) fn to_body<T: Serialize + ?Sized>(body: &T) -> Result<Value, EventError> {
    Ok(serde_json::to_value(body)?)
}

/// The requested tier, or the default tier.
pub(crate) fn tier(params: &MockEventParameters) -> &str {
    params.tier.as_deref().unwrap_or(DEFAULT_TIER)
}

/// `params.cost` when positive, otherwise `fallback()`.
pub(crate) fn amount_or(params: &MockEventParameters, fallback: impl FnOnce() -> i64) -> i64 {
    if params.cost > 0 {
        params.cost
    } else {
        fallback()
    }
}

/// `timestamp` moved forward by `minutes`. Unparseable timestamps are
/// returned unchanged.
pub(crate) fn shift_timestamp(timestamp: &str, minutes: i64) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| (t + Duration::minutes(minutes)).to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .unwrap_or_else(|_| timestamp.to_string())
}

/// The broadcaster the subscription targets (the request's "to" user).
#[derive(Debug, Serialize)]
pub(crate) struct Broadcaster<'a> {
    pub broadcaster_user_id: &'a str,
    pub broadcaster_user_login: &'a str,
    pub broadcaster_user_name: &'a str,
}

impl<'a> Broadcaster<'a> {
    pub fn of(params: &'a MockEventParameters) -> Self {
        Self {
            broadcaster_user_id: &params.to_user_id,
            broadcaster_user_login: &params.to_user_login,
            broadcaster_user_name: &params.to_user_name,
        }
    }
}

/// The user that caused the event (the request's "from" user). Fields are
/// `null` for anonymous users.
#[derive(Debug, Serialize)]
pub(crate) struct User<'a> {
    pub user_id: Option<&'a str>,
    pub user_login: Option<&'a str>,
    pub user_name: Option<&'a str>,
}

impl<'a> User<'a> {
    pub fn of(params: &'a MockEventParameters) -> Self {
        Self {
            user_id: Some(&params.from_user_id),
            user_login: Some(&params.from_user_login),
            user_name: Some(&params.from_user_name),
        }
    }

    /// The source user, or all `null` when the request is anonymous.
    pub fn unless_anonymous(params: &'a MockEventParameters) -> Self {
        if params.is_anonymous {
            Self {
                user_id: None,
                user_login: None,
                user_name: None,
            }
        } else {
            Self::of(params)
        }
    }
}

/// The moderator acting on the channel. Mock events use the broadcaster.
#[derive(Debug, Serialize)]
pub(crate) struct Moderator<'a> {
    pub moderator_user_id: &'a str,
    pub moderator_user_login: &'a str,
    pub moderator_user_name: &'a str,
}

impl<'a> Moderator<'a> {
    pub fn of(params: &'a MockEventParameters) -> Self {
        Self {
            moderator_user_id: &params.to_user_id,
            moderator_user_login: &params.to_user_login,
            moderator_user_name: &params.to_user_name,
        }
    }
}
