//! Payload generation error types.

use thiserror::Error;

/// Errors that can occur while building a mock payload.
///
/// Payload shapes are fixed at compile time, so these indicate a bug rather
/// than bad input.
#[derive(Error, Debug)]
pub enum EventError {
    /// Failed to serialize the envelope or event body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
