//! Route definitions for notes. All require auth.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-note", post(notes::add_note))
        .route("/edit-note/{note_id}", put(notes::edit_note))
        .route("/get-all-notes", get(notes::get_all_notes))
        .route("/delete-note/{note_id}", delete(notes::delete_note))
        .route("/update-note-pinned/{note_id}", put(notes::update_note_pinned))
        .route("/search-notes", get(notes::search_notes))
}
