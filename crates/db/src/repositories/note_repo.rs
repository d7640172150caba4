//! Repository for the `notes` table.
//!
//! Every query except `create` is scoped by `(id, user_id)` or `user_id`,
//! so a caller can never read or mutate another user's notes.

use notekeep_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, tags, is_pinned, user_id, created_on";

/// Pinned notes first, then insertion order.
const ORDER: &str = "ORDER BY is_pinned DESC, created_on ASC, id ASC";

/// Provides CRUD, pin and search operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a note owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (id, title, content, tags, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a note by id, scoped to its owner.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a note. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the note does not exist for this owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                tags = COALESCE($5, tags),
                is_pinned = COALESCE($6, is_pinned)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.is_pinned)
            .fetch_optional(pool)
            .await
    }

    /// Flip the pinned flag in a single statement.
    pub async fn toggle_pin(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET is_pinned = NOT is_pinned
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all notes of a user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE user_id = $1 {ORDER}");
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Notes of a user whose title or content contains `term`, ignoring case.
    ///
    /// `strpos` keeps the term literal, so `%` and `_` need no escaping.
    pub async fn search(
        pool: &PgPool,
        user_id: DbId,
        term: &str,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE user_id = $1
               AND (strpos(lower(title), lower($2)) > 0
                    OR strpos(lower(content), lower($2)) > 0)
             {ORDER}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(term)
            .fetch_all(pool)
            .await
    }
}
