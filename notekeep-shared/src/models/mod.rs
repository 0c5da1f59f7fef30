/// Database models for notekeep
///
/// # Models
///
/// - `user`: User accounts and credential lookup
/// - `note`: Owner-scoped text notes
///
/// # Example
///
/// ```no_run
/// use notekeep_shared::models::note::Note;
/// use notekeep_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let id = Note::create(&pool, 1, "buy milk").await?;
/// let notes = Note::list_by_owner(&pool, 1).await?;
/// assert!(notes.iter().any(|n| n.id == id));
/// # Ok(())
/// # }
/// ```

pub mod note;
pub mod user;
