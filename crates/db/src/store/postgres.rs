//! PostgreSQL backend delegating to the sqlx repositories.

use async_trait::async_trait;
use notekeep_core::types::DbId;

use crate::error::StoreResult;
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::user::{CreateUser, User};
use crate::repositories::{NoteRepo, UserRepo};
use crate::store::NoteStore;
use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Wrap an existing pool (used by `#[sqlx::test]`).
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the pool, check connectivity and apply migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        tracing::info!(max_connections, "Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl NoteStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_note(&self, user_id: DbId, input: &CreateNote) -> StoreResult<Note> {
        Ok(NoteRepo::create(&self.pool, user_id, input).await?)
    }

    async fn find_note(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>> {
        Ok(NoteRepo::find_scoped(&self.pool, id, user_id).await?)
    }

    async fn update_note(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>> {
        Ok(NoteRepo::update(&self.pool, id, user_id, input).await?)
    }

    async fn toggle_pin(&self, id: DbId, user_id: DbId) -> StoreResult<Option<Note>> {
        Ok(NoteRepo::toggle_pin(&self.pool, id, user_id).await?)
    }

    async fn delete_note(&self, id: DbId, user_id: DbId) -> StoreResult<bool> {
        Ok(NoteRepo::delete(&self.pool, id, user_id).await?)
    }

    async fn list_notes(&self, user_id: DbId) -> StoreResult<Vec<Note>> {
        Ok(NoteRepo::list_by_user(&self.pool, user_id).await?)
    }

    async fn search_notes(&self, user_id: DbId, query: &str) -> StoreResult<Vec<Note>> {
        Ok(NoteRepo::search(&self.pool, user_id, query).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
