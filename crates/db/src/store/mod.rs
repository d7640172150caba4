//! The store handle injected into the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use notekeep_core::types::DbId;

use crate::error::StoreResult;
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, User};

pub mod memory;
pub mod postgres;

/// URL scheme that selects the in-process backend.
pub const MEMORY_URL_PREFIX: &str = "memory:";

/// Users and notes collections behind one handle.
///
/// Note operations taking both `id` and `user_id` are scoped lookups: a note
/// owned by someone else behaves exactly like a missing one. Listing and
/// search return pinned notes first, then insertion order.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> StoreResult<()>;

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>>;

    async fn create_note(&self, user_id: DbId, input: &CreateNote) -> StoreResult<Note>;

    async fn find_note(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>>;

    async fn update_note(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>>;

    /// Invert the pinned flag atomically.
    async fn toggle_pin(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>>;

    /// Returns `true` if a note was removed.
    async fn delete_note(&self, id: DbId, user_id: DbId) -> StoreResult<bool>;

    async fn list_notes(&self, user_id: DbId) -> StoreResult<Vec<Note>>;

    /// Case-insensitive literal substring match on title or content.
    async fn search_notes(&self, user_id: DbId, query: &str) -> StoreResult<Vec<Note>>;

    /// Release connections. The handle must not be used afterwards.
    async fn close(&self);
}

pub type SharedStore = Arc<dyn NoteStore>;

/// Open the store named by `database_url`.
///
/// `memory://` yields an empty [`memory::MemoryStore`]; anything else is
/// treated as a PostgreSQL URL, health-checked and migrated before use.
pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<SharedStore> {
    if database_url.starts_with(MEMORY_URL_PREFIX) {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        return Ok(Arc::new(memory::MemoryStore::new()));
    }

    let store = postgres::PgStore::connect(database_url, max_connections).await?;
    Ok(Arc::new(store))
}
