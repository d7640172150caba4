//! Shared response envelope types for API handlers.
//!
//! Responses carry an `error` flag next to a human-readable `message`; the
//! browser client branches on the flag, not on the status code. Handler
//! specific payloads (`note`, `notes`, `user`, ...) are declared next to
//! their handlers.

use serde::Serialize;

/// Message returned for any store or internal failure.
pub const MSG_INTERNAL: &str = "Internal server error";

/// `{ "error": bool, "message": "..." }` with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub error: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}
