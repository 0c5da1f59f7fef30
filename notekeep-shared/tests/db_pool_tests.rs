/// Integration tests for the file-backed connection pool
///
/// Each test works in its own temporary directory, so they can run in
/// parallel without a shared database.

use notekeep_shared::db::pool::{close_pool, create_pool, get_pool_stats, health_check, DatabaseConfig};
use notekeep_shared::db::schema::{ensure_schema, table_exists};
use notekeep_shared::models::note::Note;
use notekeep_shared::models::user::{CreateUser, User};
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("notes.db").display()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_pool_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.db");
    assert!(!path.exists());

    let pool = create_pool(file_config(&dir)).await.expect("Failed to create pool");
    assert!(path.exists(), "Database file should be created");

    let stats = get_pool_stats(&pool);
    assert!(stats.total_connections > 0, "Pool should have at least one connection");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_pool_without_create_if_missing_fails() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        create_if_missing: false,
        connect_timeout_seconds: 2,
        ..file_config(&dir)
    };

    let result = create_pool(config).await;
    assert!(result.is_err(), "Opening a missing file should fail");
}

#[tokio::test]
async fn test_create_pool_in_missing_directory() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("missing/notes.db").display()),
        connect_timeout_seconds: 2,
        ..Default::default()
    };

    let result = create_pool(config).await;
    assert!(result.is_err(), "Parent directories are not created");
}

#[tokio::test]
async fn test_health_check_success() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(file_config(&dir)).await.expect("Failed to create pool");

    assert!(health_check(&pool).await.is_ok(), "Health check should succeed");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let pool = create_pool(file_config(&dir)).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    let user_id = User::create(
        &pool,
        CreateUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        },
    )
    .await
    .unwrap();
    let note_id = Note::create(&pool, user_id, "buy milk").await.unwrap();
    close_pool(pool).await;

    let pool = create_pool(file_config(&dir)).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let user = User::find_by_email_and_password(&pool, "a@x.com", "p")
        .await
        .unwrap()
        .expect("User should persist");
    assert_eq!(user.id, user_id);

    let notes = Note::list_by_owner(&pool, user_id).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, note_id);
    assert_eq!(notes[0].text, "buy milk");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_schema_on_file_database() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(file_config(&dir)).await.unwrap();

    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    assert!(table_exists(&pool, "users").await.unwrap());
    assert!(table_exists(&pool, "notes").await.unwrap());
    assert!(!table_exists(&pool, "sessions").await.unwrap());

    close_pool(pool).await;
}
