//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a Bearer token.
//! - [`json::JsonBody`] -- JSON body that always rejects with the API envelope.

pub mod auth;
pub mod json;
