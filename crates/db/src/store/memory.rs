//! In-process backend with the same semantics as PostgreSQL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use notekeep_core::search::note_matches;
use notekeep_core::types::{new_id, DbId};
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, User};
use crate::store::NoteStore;

/// Collections kept in insertion order.
#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    notes: Vec<Note>,
}

/// In-memory store for tests and `DATABASE_URL=memory://`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn note_count(&self) -> usize {
        self.inner.read().await.notes.len()
    }
}

/// Pinned first; the stable sort keeps insertion order within each group.
fn pinned_first(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by_key(|n| !n.is_pinned);
    notes
}

#[async_trait]
impl NoteStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        let user = User {
            id: new_id(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_on: Utc::now(),
        };
        self.inner.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_note(&self, user_id: DbId, input: &CreateNote) -> StoreResult<Note> {
        let note = Note {
            id: new_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            tags: input.tags.clone(),
            is_pinned: false,
            user_id,
            created_on: Utc::now(),
        };
        self.inner.write().await.notes.push(note.clone());
        Ok(note)
    }

    async fn find_note(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>> {
        let inner = self.inner.read().await;
        Ok(inner
            .notes
            .iter()
            .find(|n| n.id == id && n.user_id == user_id)
            .cloned())
    }

    async fn update_note(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>> {
        let mut inner = self.inner.write().await;
        let Some(note) = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        else {
            return Ok(None);
        };
        input.apply_to(note);
        Ok(Some(note.clone()))
    }

    async fn toggle_pin(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .notes
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
            .map(|note| {
                note.is_pinned = !note.is_pinned;
                note.clone()
            }))
    }

    async fn delete_note(&self, id: DbId, user_id: DbId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.notes.len();
        inner.notes.retain(|n| !(n.id == id && n.user_id == user_id));
        Ok(inner.notes.len() < before)
    }

    async fn list_notes(&self, user_id: DbId) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        let notes = inner
            .notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        Ok(pinned_first(notes))
    }

    async fn search_notes(&self, user_id: DbId, query: &str) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        let notes = inner
            .notes
            .iter()
            .filter(|n| n.user_id == user_id && note_matches(&n.title, &n.content, query))
            .cloned()
            .collect();
        Ok(pinned_first(notes))
    }

    async fn close(&self) {
        let mut inner = self.inner.write().await;
        inner.users.clear();
        inner.notes.clear();
    }
}
