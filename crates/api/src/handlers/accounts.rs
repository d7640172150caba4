//! Handlers for account creation, login and the current user.

use axum::extract::State;
use axum::Json;
use notekeep_core::accounts::{validate_credentials, validate_new_account};
use notekeep_db::models::user::{CreateUser, UserResponse};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::JsonBody;
use crate::state::AppState;

pub const MSG_USER_EXISTS: &str = "User already exists";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid Credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /create-account`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub error: bool,
    pub user: UserResponse,
    pub access_token: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub error: bool,
    pub email: String,
    pub access_token: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /create-account
///
/// Register a user and return it with a fresh access token. An existing
/// email is a business failure (200 with `error: true`).
pub async fn create_account(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAccountRequest>,
) -> AppResult<Json<CreateAccountResponse>> {
    let account = validate_new_account(
        input.full_name.as_deref(),
        input.email.as_deref(),
        input.password.as_deref(),
    )
    .map_err(|msg| {
        tracing::warn!(%msg, "Create-account request rejected");
        AppError::validation(msg)
    })?;

    if state.store.find_user_by_email(account.email).await?.is_some() {
        tracing::warn!(email = %account.email, "User already exists");
        return Err(AppError::rejected(MSG_USER_EXISTS));
    }

    let password_hash = hash_password(account.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = state
        .store
        .create_user(&CreateUser {
            full_name: account.full_name.to_string(),
            email: account.email.to_string(),
            password_hash,
        })
        .await?;

    let user = UserResponse::from(&user);
    let access_token = generate_access_token(&user, &state.config.token)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered successfully");

    Ok(Json(CreateAccountResponse {
        error: false,
        user,
        access_token,
        message: "Registration Successful",
    }))
}

/// POST /login
///
/// Exchange email + password for an access token. Unknown email and wrong
/// password differ only in the message.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let credentials = validate_credentials(input.email.as_deref(), input.password.as_deref())
        .map_err(|msg| {
            tracing::warn!(%msg, "Login request rejected");
            AppError::validation(msg)
        })?;

    let Some(user) = state.store.find_user_by_email(credentials.email).await? else {
        tracing::warn!(email = %credentials.email, "User not found");
        return Err(AppError::rejected(MSG_USER_NOT_FOUND));
    };

    let password_valid = verify_password(credentials.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(email = %credentials.email, "Invalid credentials");
        return Err(AppError::rejected(MSG_INVALID_CREDENTIALS));
    }

    let access_token = generate_access_token(&UserResponse::from(&user), &state.config.token)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, email = %user.email, "User logged in successfully");

    Ok(Json(LoginResponse {
        error: false,
        email: user.email,
        access_token,
        message: "Login Successful",
    }))
}

/// GET /get-user
///
/// Return the current user, re-read from the store rather than trusted from
/// the token. A user that no longer exists is treated as unauthenticated.
pub async fn get_user(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<CurrentUserResponse>> {
    let Some(user) = state.store.find_user_by_id(auth.user_id).await? else {
        tracing::warn!(user_id = %auth.user_id, email = %auth.snapshot.email, "User not found");
        return Err(AppError::unauthorized("Token user no longer exists"));
    };

    tracing::info!(user_id = %user.id, "User details retrieved successfully");

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(&user),
        message: "",
    }))
}
