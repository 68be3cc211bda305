//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for expenses, monthly budgets and history
//! - Error to HTTP response mapping
//! - Static frontend serving

pub mod error;
pub mod extract;
pub mod routes;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use extract::JsonBody;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tally_shared::FrontendConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

/// Creates the main application router.
///
/// When a frontend directory is configured it is served for every path the
/// API does not claim, with `index.html` as the SPA fallback.
pub fn create_router(state: AppState, frontend: &FrontendConfig) -> Router {
    let mut router = routes::api_routes();

    if let Some(dir) = frontend.static_dir.as_deref() {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
