use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notekeep_core::error::CoreError;
use notekeep_db::StoreError;

use crate::response::{MessageResponse, MSG_INTERNAL};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for backend
/// failures. The status mapping keeps the wire contract the browser client
/// relies on:
///
/// | Error                         | Status | Body                          |
/// |-------------------------------|--------|-------------------------------|
/// | `Validation` / `BadRequest`   | 400    | `{error: true, message}`      |
/// | `Unauthorized`                | 401    | empty                         |
/// | `NotFound`                    | 404    | `{error: true, message}`      |
/// | `Rejected`                    | 200    | `{error: true, message}`      |
/// | store / internal              | 200    | `{error: true, "Internal server error"}` |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notekeep_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the store backend.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error; the message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::Validation(message.into()))
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        AppError::Core(CoreError::Unauthorized(reason.into()))
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::Rejected(message.into()))
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound {
            entity,
            id: id.into(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(reason) => {
                    tracing::debug!(%reason, "Unauthorized request");
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Rejected(msg) => (StatusCode::OK, msg.clone()),
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::OK, MSG_INTERNAL.to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::OK, MSG_INTERNAL.to_string())
            }
        };

        (status, Json(MessageResponse::failure(message))).into_response()
    }
}
