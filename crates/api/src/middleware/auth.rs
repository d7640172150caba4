//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use notekeep_core::types::DbId;
use notekeep_db::models::user::UserResponse;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the `Authorization: Bearer <token>` header.
///
/// Put it first in a handler's argument list so a bad token is rejected
/// with 401 before the body is parsed or the store is touched:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The owning user's id, used to scope every note query.
    pub user_id: DbId,
    /// The user as embedded in the token at issuance (may be stale).
    pub snapshot: UserResponse,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.token)
            .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {e}")))?;

        Ok(AuthUser {
            user_id: claims.user.id,
            snapshot: claims.user,
        })
    }
}
