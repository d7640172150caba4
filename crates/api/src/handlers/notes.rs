//! Handlers for a user's notes: create, edit, pin, delete, list and search.
//!
//! Every handler takes [`AuthUser`] first and scopes store access by the
//! caller's id, so a note owned by someone else is indistinguishable from a
//! missing one (404).

use axum::extract::{Path, Query, State};
use axum::Json;
use notekeep_core::notes::{
    has_changes, non_empty, pin_raise, validate_new_note, ENTITY_NOTE, MSG_NO_CHANGES,
};
use notekeep_core::search::validate_query;
use notekeep_core::types::DbId;
use notekeep_db::models::note::{CreateNote, Note, UpdateNote};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /add-note`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request body for `PUT /edit-note/{note_id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

/// Query parameters for `GET /search-notes`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub error: bool,
    pub note: Note,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub error: bool,
    pub notes: Vec<Note>,
    pub message: &'static str,
}

/// Parse a path id; a malformed id cannot name an existing note.
fn parse_note_id(raw: &str) -> AppResult<DbId> {
    DbId::parse_str(raw).map_err(|_| {
        tracing::warn!(note_id = %raw, "Note not found");
        AppError::not_found(ENTITY_NOTE, raw)
    })
}

fn note_not_found(id: DbId) -> AppError {
    tracing::warn!(note_id = %id, "Note not found");
    AppError::not_found(ENTITY_NOTE, id.to_string())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /add-note
pub async fn add_note(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AddNoteRequest>,
) -> AppResult<Json<NoteResponse>> {
    validate_new_note(input.title.as_deref(), input.content.as_deref()).map_err(|msg| {
        tracing::warn!(%msg, "Add-note request rejected");
        AppError::validation(msg)
    })?;

    let create = CreateNote {
        title: input.title.unwrap_or_default(),
        content: input.content.unwrap_or_default(),
        tags: input.tags.unwrap_or_default(),
    };
    let note = state.store.create_note(auth.user_id, &create).await?;

    tracing::info!(user_id = %auth.user_id, note_id = %note.id, "Note added successfully");

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "Note added successfully",
    }))
}

/// PUT /edit-note/{note_id}
///
/// Partial update. Empty title/content are ignored, a present tag list
/// always replaces the tags, and `isPinned` can only raise the flag.
pub async fn edit_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    JsonBody(input): JsonBody<EditNoteRequest>,
) -> AppResult<Json<NoteResponse>> {
    if !has_changes(
        input.title.as_deref(),
        input.content.as_deref(),
        input.tags.as_deref(),
    ) {
        tracing::warn!(note_id = %note_id, "No changes provided");
        return Err(AppError::validation(MSG_NO_CHANGES));
    }

    let id = parse_note_id(&note_id)?;
    let update = UpdateNote {
        title: non_empty(input.title),
        content: non_empty(input.content),
        tags: input.tags,
        is_pinned: pin_raise(input.is_pinned),
    };

    let note = state
        .store
        .update_note(id, auth.user_id, &update)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(user_id = %auth.user_id, note_id = %id, "Note updated successfully");

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "Note updated successfully",
    }))
}

/// GET /get-all-notes
///
/// The caller's notes, pinned first.
pub async fn get_all_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<NotesResponse>> {
    let notes = state.store.list_notes(auth.user_id).await?;

    tracing::info!(
        user_id = %auth.user_id,
        count = notes.len(),
        "All notes retrieved successfully"
    );

    Ok(Json(NotesResponse {
        error: false,
        notes,
        message: "All notes retrieved successfully",
    }))
}

/// DELETE /delete-note/{note_id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_note_id(&note_id)?;

    if !state.store.delete_note(id, auth.user_id).await? {
        return Err(note_not_found(id));
    }

    tracing::info!(user_id = %auth.user_id, note_id = %id, "Note deleted successfully");

    Ok(Json(MessageResponse::ok("Note deleted successfully")))
}

/// PUT /update-note-pinned/{note_id}
///
/// Inverts the stored pinned flag. The request body (`isPinned`) is not
/// consulted.
pub async fn update_note_pinned(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<Json<NoteResponse>> {
    let id = parse_note_id(&note_id)?;

    let note = state
        .store
        .toggle_pin(id, auth.user_id)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(
        user_id = %auth.user_id,
        note_id = %id,
        is_pinned = note.is_pinned,
        "isPinned updated successfully"
    );

    Ok(Json(NoteResponse {
        error: false,
        note,
        message: "isPinned updated successfully",
    }))
}

/// GET /search-notes?query=
///
/// Case-insensitive substring match on title or content.
pub async fn search_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<NotesResponse>> {
    let query = validate_query(params.query.as_deref()).map_err(|msg| {
        tracing::warn!(%msg, "Search request rejected");
        AppError::validation(msg)
    })?;

    let notes = state.store.search_notes(auth.user_id, query).await?;

    tracing::info!(
        user_id = %auth.user_id,
        count = notes.len(),
        "Notes matching the search query retrieved successfully"
    );

    Ok(Json(NotesResponse {
        error: false,
        notes,
        message: "Notes matching the search query retrieved successfully",
    }))
}
