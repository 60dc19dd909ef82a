//! Generated payload returned to callers.

/// A generated mock event: the serialized payload plus the metadata a
/// caller needs to deliver or display it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockEventResponse {
    /// The notification message ID.
    pub id: String,
    /// The serialized JSON payload.
    pub json: String,
    /// ID of the user that caused the event.
    pub from_user: String,
    /// ID of the broadcaster the event targets.
    pub to_user: String,
}
