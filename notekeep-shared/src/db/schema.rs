/// Schema bootstrap
///
/// The store has exactly two tables and no migration history. Both are
/// created with `CREATE TABLE IF NOT EXISTS`, so running [`ensure_schema`]
/// against an already initialized database is a no-op.
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT,
///     email TEXT,
///     password TEXT
/// );
///
/// CREATE TABLE notes (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id INTEGER,
///     note TEXT
/// );
/// ```

use sqlx::sqlite::SqlitePool;
use tracing::{debug, info, warn};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        password TEXT
    )
"#;

const CREATE_NOTES: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        note TEXT
    )
"#;

/// Names of the tables owned by the store, in creation order
pub const TABLES: [&str; 2] = ["users", "notes"];

/// Creates the `users` and `notes` tables if they are absent
///
/// # Errors
///
/// Returns an error if either statement fails. Startup should abort in
/// that case; the handlers cannot work without both tables.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    for (table, statement) in TABLES.iter().zip([CREATE_USERS, CREATE_NOTES]) {
        if let Err(e) = sqlx::query(statement).execute(pool).await {
            warn!(table, error = %e, "Failed to create table");
            return Err(e);
        }
        debug!(table, "Table ready");
    }

    info!("Database schema ready");
    Ok(())
}

/// Reports whether a table with the given name exists
pub async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{create_pool, DatabaseConfig};

    #[tokio::test]
    async fn test_ensure_schema_creates_tables() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

        assert!(!table_exists(&pool, "users").await.unwrap());
        ensure_schema(&pool).await.unwrap();

        for table in TABLES {
            assert!(table_exists(&pool, table).await.unwrap(), "{} missing", table);
        }
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO notes (user_id, note) VALUES (1, 'kept')")
            .execute(&pool)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
