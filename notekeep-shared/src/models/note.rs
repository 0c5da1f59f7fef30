/// Note model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE notes (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER,
///     note TEXT
/// );
/// ```
///
/// Every query filters on `user_id`, so a note is only ever visible to, and
/// removable by, its owner. `user_id` is not a foreign key: removing a user
/// leaves their notes in place.

use sqlx::SqlitePool;
use tracing::debug;

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    /// Store-assigned id, unique across all users
    pub id: i64,

    /// Id of the owning user
    #[sqlx(rename = "user_id")]
    pub owner_id: i64,

    /// Note body
    #[sqlx(rename = "note")]
    pub text: String,
}

impl Note {
    /// Inserts a note for `owner_id`
    ///
    /// # Returns
    ///
    /// The id of the inserted row. The id comes from the insert statement
    /// itself, so concurrent creates each get their own id back.
    pub async fn create(pool: &SqlitePool, owner_id: i64, text: &str) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO notes (user_id, note)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(owner_id)
        .bind(text)
        .fetch_one(pool)
        .await?;

        debug!(note_id = id, owner_id, "Note created");
        Ok(id)
    }

    /// Lists every note owned by `owner_id`, oldest first
    ///
    /// An owner without notes yields an empty vector.
    pub async fn list_by_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, note
            FROM notes
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Deletes note `id` if it belongs to `owner_id`
    ///
    /// # Returns
    ///
    /// True if a row was removed. A missing id or a note owned by someone
    /// else is not an error and returns false.
    pub async fn delete(pool: &SqlitePool, id: i64, owner_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(note_id = id, owner_id, deleted, "Note delete");
        Ok(deleted)
    }
}
