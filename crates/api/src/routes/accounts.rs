//! Route definitions for accounts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// ```text
/// POST /create-account -> create_account
/// POST /login          -> login
/// GET  /get-user       -> get_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-account", post(accounts::create_account))
        .route("/login", post(accounts::login))
        .route("/get-user", get(accounts::get_user))
}
