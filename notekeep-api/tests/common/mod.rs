/// Common test utilities for integration tests
///
/// - In-memory store with the schema applied
/// - Router built on fresh state
/// - Request helpers returning status and decoded JSON

use axum::body::Body;
use axum::http::{Request, StatusCode};
use notekeep_api::app::{build_router, AppState};
use notekeep_api::config::{ApiConfig, Config, DatabaseConfig, LogConfig, LogFormat};
use notekeep_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use notekeep_shared::db::schema::ensure_schema;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub state: AppState,
    pub app: axum::Router,
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        log: LogConfig {
            format: LogFormat::Pretty,
        },
    }
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(PoolConfig::in_memory()).await?;
        ensure_schema(&db).await?;

        Ok(Self::with_pool(db))
    }

    /// Builds a context around an existing pool with no sessions
    pub fn with_pool(db: SqlitePool) -> Self {
        let state = AppState::new(db.clone(), test_config());
        let app = build_router(state.clone());

        TestContext { db, state, app }
    }

    /// Sends a request with a raw body and returns status and body bytes
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body.into())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, body.to_vec())
    }

    /// Sends a JSON body and decodes the JSON response (Null when empty)
    pub async fn send(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(method, uri, body.to_string()).await;

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> StatusCode {
        let (status, _) = self
            .send(
                "POST",
                "/signup",
                json!({ "name": name, "email": email, "password": password }),
            )
            .await;
        status
    }

    /// Logs in and returns the session id, panicking on failure
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send("POST", "/login", json!({ "email": email, "password": password }))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        body["sid"].as_str().unwrap().to_string()
    }

    /// Registers and logs in, returning the session id
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        assert_eq!(self.signup(name, email, password).await, StatusCode::OK);
        self.login(email, password).await
    }

    pub async fn create_note(&self, sid: &str, note: &str) -> (StatusCode, Value) {
        self.send("POST", "/notes", json!({ "sid": sid, "note": note })).await
    }

    pub async fn list_notes(&self, sid: &str) -> (StatusCode, Value) {
        self.send("GET", "/notes", json!({ "sid": sid })).await
    }

    pub async fn delete_note(&self, sid: &str, id: i64) -> (StatusCode, Value) {
        self.send("DELETE", "/notes", json!({ "sid": sid, "id": id })).await
    }
}
