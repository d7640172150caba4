pub mod accounts;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Paths sit at the root to match the browser client:
///
/// ```text
/// /create-account                      create account (public)
/// /login                               login (public)
/// /get-user                            current user (auth)
///
/// /add-note                            create note (auth)
/// /edit-note/{note_id}                 partial update (auth)
/// /get-all-notes                       list, pinned first (auth)
/// /delete-note/{note_id}               delete (auth)
/// /update-note-pinned/{note_id}        toggle pin (auth)
/// /search-notes?query=                 substring search (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(accounts::router())
        .merge(notes::router())
}
