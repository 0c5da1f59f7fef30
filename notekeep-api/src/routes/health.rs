/// Health check endpoint
///
/// Reports whether the server is running and the store is reachable.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "pool": {"active": 0, "idle": 1, "total": 1},
///   "sessions": 3
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use notekeep_shared::db::pool;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,

    /// Connection pool usage
    pub pool: PoolUsage,

    /// Number of live sessions
    pub sessions: usize,
}

/// Connection counts taken from the pool
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolUsage {
    pub active: usize,
    pub idle: usize,
    pub total: usize,
}

impl From<pool::PoolStats> for PoolUsage {
    fn from(stats: pool::PoolStats) -> Self {
        Self {
            active: stats.active_connections,
            idle: stats.idle_connections,
            total: stats.total_connections,
        }
    }
}

/// Health check handler
///
/// Always answers 200; a failing store shows up as `"degraded"`.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let connected = pool::health_check(&state.db).await.is_ok();

    Ok(Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        pool: pool::get_pool_stats(&state.db).into(),
        sessions: state.sessions.len().await,
    }))
}
