//! # notekeep API Server
//!
//! Multi-user note service: register, log in for a session id, then create,
//! list and delete personal notes.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p notekeep-api
//! ```

use notekeep_api::{
    app::{build_router, AppState},
    config::Config,
    telemetry,
};
use notekeep_shared::db::{pool, schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    telemetry::init(config.log.format);

    tracing::info!(
        "notekeep API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let db = pool::create_pool(config.pool_config()).await?;
    schema::ensure_schema(&db).await?;

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
