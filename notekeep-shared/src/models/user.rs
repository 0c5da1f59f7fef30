/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT,
///     email TEXT,
///     password TEXT
/// );
/// ```
///
/// `email` is the login key but carries no unique constraint. When several
/// rows share an email the lowest id wins every lookup.
///
/// # Example
///
/// ```no_run
/// use notekeep_shared::models::user::{CreateUser, User};
/// use notekeep_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let id = User::create(
///     &pool,
///     CreateUser {
///         name: "Ann".to_string(),
///         email: "a@x.com".to_string(),
///         password: "p".to_string(),
///     },
/// )
/// .await?;
///
/// let found = User::find_by_email(&pool, "a@x.com").await?;
/// assert_eq!(found.map(|u| u.id), Some(id));
/// # Ok(())
/// # }
/// ```

use crate::auth::password::{hash_password, verify_password, PasswordError};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, warn};

/// Error type for user store operations that also touch passwords
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Underlying storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Runs an Argon2 computation on the blocking thread pool
async fn run_blocking<T, F>(work: F) -> Result<T, PasswordError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PasswordError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| PasswordError::HashError(format!("Hashing task failed: {}", e)))?
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned id, monotonically increasing
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login email (not unique)
    pub email: String,

    /// Argon2id PHC hash, never returned to clients
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Input for registering a user
///
/// `password` is plaintext here and hashed by [`User::create`].
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Hashes the password and inserts a new user row
    ///
    /// Duplicate emails are accepted.
    ///
    /// # Returns
    ///
    /// The id assigned to the new row
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the store rejects the insert
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<i64, UserError> {
        let password = data.password;
        let password_hash = run_blocking(move || hash_password(&password)).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, password)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&password_hash)
        .fetch_one(pool)
        .await?;

        debug!(user_id = id, email = %data.email, "User created");
        Ok(id)
    }

    /// Finds the first user (lowest id) with the given email
    ///
    /// Email comparison is exact.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Finds the first user (lowest id) with the given email whose stored
    /// hash verifies `password`
    ///
    /// Rows whose password column is not a valid hash are skipped with a
    /// warning rather than failing the lookup. Candidates are verified in id
    /// order on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the verification task dies
    pub async fn find_by_email_and_password(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<Option<Self>, UserError> {
        let candidates = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = ?
            ORDER BY id
            "#,
        )
        .bind(email)
        .fetch_all(pool)
        .await?;

        if candidates.is_empty() {
            return Ok(None);
        }

        let password = password.to_string();
        let matched = run_blocking(move || {
            for user in candidates {
                match verify_password(&password, &user.password_hash) {
                    Ok(true) => return Ok(Some(user)),
                    Ok(false) => continue,
                    Err(e) => {
                        warn!(user_id = user.id, error = %e, "Skipping user with unreadable password hash");
                    }
                }
            }
            Ok(None)
        })
        .await?;

        Ok(matched)
    }
}
