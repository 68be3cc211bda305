//! Tally API Server
//!
//! Serves the expense ledger API and, when configured, the built frontend.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_api::{AppState, create_router};
use tally_db::connect;
use tally_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug,tally_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database)
        .await
        .context("Invalid database configuration")?;

    // The pool is lazy; an unreachable database only fails the requests that need it.
    let target = config.database.redacted_url();
    match db.ping().await {
        Ok(()) => info!(database = %target, "Connected to database"),
        Err(e) => error!(error = %e, database = %target, "Database unreachable at startup"),
    }

    let state = AppState { db: Arc::new(db) };

    if let Some(dir) = &config.frontend.static_dir {
        info!(static_dir = %dir, "Serving frontend");
    }
    let app = create_router(state, &config.frontend);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
