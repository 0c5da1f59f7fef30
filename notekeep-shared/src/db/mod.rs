/// Database layer for notekeep
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Idempotent creation of the `users` and `notes` tables
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use notekeep_shared::db::pool::{create_pool, DatabaseConfig};
/// use notekeep_shared::db::schema::ensure_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     ensure_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
